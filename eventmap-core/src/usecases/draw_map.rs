use super::{prelude::*, Marker, SearchCriteria, SearchOutcome};
use crate::gateways::map::MapRenderer;

/// South-west corner of the Czech Republic, `(lat, lng)`.
///
/// The southernmost point lies at 48.5525 N, the westernmost at 12.091389 E.
pub const DEFAULT_MAP_SOUTH_WEST: (f64, f64) = (48.5525, 12.091389);

/// North-east corner of the Czech Republic, `(lat, lng)`.
///
/// The northernmost point lies at 51.055556 N, the easternmost at 18.858889 E.
pub const DEFAULT_MAP_NORTH_EAST: (f64, f64) = (51.055556, 18.858889);

/// Map view used when there is nothing to show.
pub fn default_map_bbox() -> MapBbox {
    let (sw_lat, sw_lng) = DEFAULT_MAP_SOUTH_WEST;
    let (ne_lat, ne_lng) = DEFAULT_MAP_NORTH_EAST;
    MapBbox::new(
        MapPoint::from_lat_lng_deg(sw_lat, sw_lng),
        MapPoint::from_lat_lng_deg(ne_lat, ne_lng),
    )
}

/// Draws the markers of a search outcome onto the map.
///
/// The search area is drawn if the criteria contain one. The view is
/// fitted to the markers or to the default bounds if there are none.
pub fn draw_map<M>(map: &mut M, outcome: &SearchOutcome, criteria: &SearchCriteria)
where
    M: MapRenderer + ?Sized,
{
    for marker in &outcome.markers {
        map.add_marker(marker);
    }
    if let Some(area) = criteria.location.search_area() {
        map.add_search_area(area);
    }
    let bbox = MapBbox::enclosing(outcome.markers.iter().map(|m: &Marker| m.pos))
        .unwrap_or_else(default_map_bbox);
    log::debug!("Fitting map to {}", bbox);
    map.fit_bounds(bbox);
}
