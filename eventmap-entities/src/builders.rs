pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::event_builder::*;

pub mod event_builder {

    use super::*;
    use crate::{event::*, geo::*, location::*};
    use time::{Date, Time};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.event.location = Some(location.into());
            self
        }
        pub fn online(mut self) -> Self {
            self.event.venue = Venue::Online;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.site_mut().pos = Some(pos);
            self
        }
        pub fn geocoded_pos(mut self, pos: MapPoint) -> Self {
            self.site_mut().geocoded_pos = Some(pos);
            self
        }
        pub fn area(mut self, area: Area) -> Self {
            self.site_mut().area = Some(area);
            self
        }
        /// Removes all positions but keeps the event physical.
        pub fn without_pos(mut self) -> Self {
            let site = self.site_mut();
            site.pos = None;
            site.geocoded_pos = None;
            self
        }
        pub fn on(self, date: Date) -> Self {
            self.occurrence(Occurrence::on(date))
        }
        pub fn between(self, start: (Date, Option<Time>), end: (Date, Option<Time>)) -> Self {
            self.occurrence(Occurrence {
                start_date: start.0,
                start_time: start.1,
                end_date: Some(end.0),
                end_time: end.1,
            })
        }
        pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
            self.event.occurrences.push(occurrence);
            self
        }
        pub fn types(mut self, types: Vec<impl Into<String>>) -> Self {
            self.event.types = types.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn keywords(mut self, keywords: Vec<impl Into<String>>) -> Self {
            self.event.keywords = keywords.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }

        fn site_mut(&mut self) -> &mut Site {
            if self.event.venue.is_online() {
                self.event.venue = Venue::Physical(Site::default());
            }
            match &mut self.event.venue {
                Venue::Physical(site) => site,
                Venue::Online => unreachable!(),
            }
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: "1".into(),
                    title: "".into(),
                    summary: None,
                    location: None,
                    venue: Venue::Physical(Site {
                        pos: Some(MapPoint::from_lat_lng_deg(0.0, 0.0)),
                        geocoded_pos: None,
                        area: None,
                    }),
                    occurrences: vec![],
                    types: vec![],
                    keywords: vec![],
                    organizer: None,
                    source: Default::default(),
                },
            }
        }
    }
}
