pub use super::*;
pub use eventmap_entities::builders::*;

use eventmap_entities::{event::Event, geo::MapPoint, id::Id, location::Area};
use std::collections::BTreeMap;
use time::macros::date;

pub fn event_ids(outcome: &SearchOutcome) -> Vec<&str> {
    let mut ids: Vec<_> = outcome
        .results
        .iter()
        .map(|r| r.event_id.as_str())
        .collect();
    ids.dedup();
    ids
}

/// A small dataset around Prague and Brno.
pub fn sample_events() -> BTreeMap<Id, Event> {
    [
        Event::build()
            .id("1")
            .title("Concert")
            .pos(MapPoint::from_lat_lng_deg(50.08, 14.43))
            .area(Area::Default("Rudolfinum".into()))
            .on(date!(2024 - 06 - 01))
            .types(vec!["music"])
            .finish(),
        Event::build()
            .id("2")
            .title("Webinar")
            .online()
            .on(date!(2024 - 06 - 03))
            .types(vec!["education"])
            .keywords(vec!["history"])
            .finish(),
        Event::build()
            .id("3")
            .title("Exhibition")
            .without_pos()
            .geocoded_pos(MapPoint::from_lat_lng_deg(49.19, 16.61))
            .area(Area::Municipality {
                municipality: "Brno".into(),
                district: "Brno-město".into(),
            })
            .between((date!(2024 - 05 - 01), None), (date!(2024 - 08 - 31), None))
            .types(vec!["art"])
            .finish(),
        Event::build()
            .id("4")
            .title("Run")
            .pos(MapPoint::from_lat_lng_deg(50.10, 14.39))
            .on(date!(2024 - 06 - 08))
            .on(date!(2024 - 06 - 15))
            .types(vec!["sport"])
            .keywords(vec!["running"])
            .finish(),
    ]
    .into_iter()
    .map(|e| (e.id.clone(), e))
    .collect()
}
