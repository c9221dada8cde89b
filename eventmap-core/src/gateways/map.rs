use crate::usecases::{Marker, SearchArea};
use eventmap_entities::geo::MapBbox;

/// Handle of a map that search results are drawn on.
///
/// The handle is owned by the caller and passed explicitly
/// into every use case that draws something.
pub trait MapRenderer {
    fn add_marker(&mut self, marker: &Marker);
    fn add_search_area(&mut self, area: &SearchArea);
    fn fit_bounds(&mut self, bbox: MapBbox);
}
