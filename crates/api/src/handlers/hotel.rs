//! Handlers for the `/hotels` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::hotel::{CreateHotelRequest, HotelView};
use hotel_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{path_or_bad_request, ValidatedJson};
use crate::state::AppState;

/// POST /api/hotels
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateHotelRequest>,
) -> AppResult<(StatusCode, Json<HotelView>)> {
    let hotel = state.hotels.create_hotel(input).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// GET /api/hotels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<HotelView>> {
    let id = path_or_bad_request(id)?;
    let hotel = state.hotels.get_hotel_by_id(id).await?;
    Ok(Json(hotel))
}
