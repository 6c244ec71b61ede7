//! Field-by-field translation between the wire shapes and [`Hotel`].

use crate::hotel::{CreateHotelRequest, Hotel, HotelView};

/// Stateless mapper between [`CreateHotelRequest`], [`Hotel`] and [`HotelView`].
///
/// Both directions copy every field verbatim. Adding a field to one shape
/// without the others is a compile error here, which is intended.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotelMapper;

impl HotelMapper {
    pub fn to_view(&self, hotel: &Hotel) -> HotelView {
        let Hotel {
            id,
            name,
            address,
            city,
            country,
            stars,
            description,
        } = hotel;

        HotelView {
            id: *id,
            name: name.clone(),
            address: address.clone(),
            city: city.clone(),
            country: country.clone(),
            stars: *stars,
            description: description.clone(),
        }
    }

    /// Build an unsaved record; the store assigns the identifier.
    pub fn to_record(&self, request: CreateHotelRequest) -> Hotel {
        let CreateHotelRequest {
            name,
            address,
            city,
            country,
            stars,
            description,
        } = request;

        Hotel {
            id: None,
            name,
            address,
            city,
            country,
            stars,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grand_hotel() -> Hotel {
        Hotel {
            id: Some(1),
            name: "Grand Hotel".to_string(),
            address: "Calle Falsa 123".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            stars: 5,
            description: Some("A luxury hotel.".to_string()),
        }
    }

    #[test]
    fn to_view_copies_every_field() {
        let hotel = grand_hotel();
        let view = HotelMapper.to_view(&hotel);

        assert_eq!(view.id, Some(1));
        assert_eq!(view.name, hotel.name);
        assert_eq!(view.address, hotel.address);
        assert_eq!(view.city, hotel.city);
        assert_eq!(view.country, hotel.country);
        assert_eq!(view.stars, hotel.stars);
        assert_eq!(view.description, hotel.description);
    }

    #[test]
    fn to_record_leaves_id_unset() {
        let request = CreateHotelRequest {
            name: "Budget Inn".to_string(),
            address: "742 Evergreen Terrace".to_string(),
            city: "Shelbyville".to_string(),
            country: "USA".to_string(),
            stars: 3,
            description: None,
        };

        let hotel = HotelMapper.to_record(request.clone());

        assert_eq!(hotel.id, None);
        assert_eq!(hotel.name, request.name);
        assert_eq!(hotel.city, request.city);
        assert_eq!(hotel.stars, request.stars);
        assert_eq!(hotel.description, None);
    }

    #[test]
    fn view_fields_round_trip_through_a_request() {
        let hotel = grand_hotel();
        let view = HotelMapper.to_view(&hotel);

        let request = CreateHotelRequest {
            name: view.name,
            address: view.address,
            city: view.city,
            country: view.country,
            stars: view.stars,
            description: view.description,
        };
        let rebuilt = HotelMapper.to_record(request);

        assert_eq!(rebuilt, Hotel { id: None, ..hotel });
    }
}
