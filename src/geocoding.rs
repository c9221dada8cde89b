use eventmap_core::GeoCodingGateway;
use eventmap_entities::{
    event::Event,
    geo::MapPoint,
    id::Id,
    location::{Area, Venue},
};
use std::collections::BTreeMap;

/// Resolves place names offline by looking them up in the dataset.
///
/// A place matches the municipality or the preset location of an
/// event, ignoring case. The positions of all matching events are
/// candidates, in dataset order.
#[derive(Debug)]
pub struct DatasetGazetteer<'a> {
    events: &'a BTreeMap<Id, Event>,
}

impl<'a> DatasetGazetteer<'a> {
    pub const fn new(events: &'a BTreeMap<Id, Event>) -> Self {
        Self { events }
    }
}

fn area_name(area: &Area) -> &str {
    match area {
        Area::Default(location) => location,
        Area::Municipality { municipality, .. } => municipality,
    }
}

impl GeoCodingGateway for DatasetGazetteer<'_> {
    fn resolve_query(&self, query: &str) -> Vec<MapPoint> {
        let query = query.to_lowercase();
        let mut candidates = Vec::new();
        for event in self.events.values() {
            let Venue::Physical(site) = &event.venue else {
                continue;
            };
            let Some(area) = &site.area else {
                continue;
            };
            if area_name(area).to_lowercase() != query {
                continue;
            }
            if let Some(pos) = site.resolve_pos() {
                if !candidates.contains(&pos) {
                    candidates.push(pos);
                }
            }
        }
        log::debug!("Resolved '{}' to {} position(s)", query, candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventmap_core::usecases::{locate_search_center, Error};
    use eventmap_entities::builders::*;

    fn events() -> BTreeMap<Id, Event> {
        [
            Event::build()
                .id("1")
                .pos(MapPoint::from_lat_lng_deg(49.19, 16.61))
                .area(Area::Municipality {
                    municipality: "Brno".into(),
                    district: "Brno-město".into(),
                })
                .finish(),
            Event::build()
                .id("2")
                .without_pos()
                .geocoded_pos(MapPoint::from_lat_lng_deg(49.20, 16.60))
                .area(Area::Default("brno".into()))
                .finish(),
            Event::build()
                .id("3")
                .pos(MapPoint::from_lat_lng_deg(49.19, 16.61))
                .area(Area::Default("Brno".into()))
                .finish(),
            Event::build().id("4").online().finish(),
        ]
        .into_iter()
        .map(|e| (e.id.clone(), e))
        .collect()
    }

    #[test]
    fn resolve_place_names_ignoring_case() {
        let events = events();
        let gazetteer = DatasetGazetteer::new(&events);
        assert_eq!(
            gazetteer.resolve_query("BRNO"),
            vec![
                MapPoint::from_lat_lng_deg(49.19, 16.61),
                MapPoint::from_lat_lng_deg(49.20, 16.60),
            ]
        );
        assert!(gazetteer.resolve_query("Brno-město").is_empty());
    }

    #[test]
    fn locate_search_center_in_dataset() {
        let events = events();
        let gazetteer = DatasetGazetteer::new(&events);
        let center = locate_search_center(&gazetteer, "Brno").unwrap();
        assert_eq!(center, MapPoint::from_lat_lng_deg(49.19, 16.61));
        assert!(matches!(
            locate_search_center(&gazetteer, "Ostrava"),
            Err(Error::LocationNotFound(_))
        ));
    }
}
