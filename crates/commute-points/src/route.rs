use commute_core::Coordinate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
}

/// Directions request handed to the routing service when a house is picked.
///
/// The route always runs from the house to the office.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub travel_mode: TravelMode,
}

impl RouteRequest {
    #[must_use]
    pub fn driving(house: Coordinate, office: Coordinate) -> Self {
        Self {
            origin: house,
            destination: office,
            travel_mode: TravelMode::Driving,
        }
    }
}
