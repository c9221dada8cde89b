use eventmap_boundary as json;
use eventmap_core::{
    usecases::{Marker, SearchArea},
    MapRenderer,
};
use eventmap_entities::geo::MapBbox;
use serde_json::{json, Value};

/// Renders the map into a GeoJSON feature collection.
#[derive(Debug, Default)]
pub struct GeoJsonMap {
    features: Vec<Value>,
    bbox: Option<MapBbox>,
}

impl GeoJsonMap {
    pub fn into_feature_collection(self) -> Value {
        let Self { features, bbox } = self;
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });
        if let Some(bbox) = bbox {
            let (sw, ne) = (bbox.south_west(), bbox.north_east());
            collection["bbox"] = json!([sw.lng_deg(), sw.lat_deg(), ne.lng_deg(), ne.lat_deg()]);
        }
        collection
    }
}

impl MapRenderer for GeoJsonMap {
    fn add_marker(&mut self, marker: &Marker) {
        let json::MapMarker {
            id,
            title,
            lat,
            lng,
            distance_km,
            occurrences,
        } = json::MapMarker::from(marker);
        self.features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [lng, lat],
            },
            "properties": {
                "kind": "event",
                "id": id,
                "title": title,
                "distance_km": distance_km,
                "occurrences": occurrences,
            },
        }));
    }

    fn add_search_area(&mut self, area: &SearchArea) {
        // GeoJSON has no circles
        self.features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [area.center.lng_deg(), area.center.lat_deg()],
            },
            "properties": {
                "kind": "search-area",
                "radius_km": area.radius.to_kilometers(),
            },
        }));
    }

    fn fit_bounds(&mut self, bbox: MapBbox) {
        self.bbox = Some(bbox);
    }
}
