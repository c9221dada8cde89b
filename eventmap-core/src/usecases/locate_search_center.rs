use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

/// Resolves a free-text location into the center of a search area.
pub fn locate_search_center<G>(geocoder: &G, query: &str) -> Result<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = query.trim();
    let candidates = geocoder.resolve_query(query);
    if candidates.len() > 1 {
        log::info!(
            "Found {} candidates for '{}', using the first one",
            candidates.len(),
            query
        );
    }
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::LocationNotFound(query.to_owned()))
}
