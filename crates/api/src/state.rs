use hotel_core::service::HotelService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the service shares its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Hotel use cases, wired to the configured store.
    pub hotels: HotelService,
}
