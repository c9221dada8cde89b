use eventmap_entities::geo::MapPoint;

pub trait GeoCodingGateway {
    /// Candidate positions for a free-text location, best match first.
    fn resolve_query(&self, query: &str) -> Vec<MapPoint>;
}
