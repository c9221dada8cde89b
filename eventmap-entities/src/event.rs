use crate::{id::*, location::*, time::*, url::*};
use time::{Date, Time};

/// Label of an online venue in listings.
pub const ONLINE_LOCATION_LABEL: &str = "online";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id          : Id,
    pub title       : String,
    pub summary     : Option<String>,
    /// Textual location as published by the source.
    pub location    : Option<String>,
    pub venue       : Venue,
    pub occurrences : Vec<Occurrence>,
    pub types       : Vec<String>,
    pub keywords    : Vec<String>,
    pub organizer   : Option<String>,
    pub source      : Source,
}

impl Event {
    pub const fn is_online(&self) -> bool {
        self.venue.is_online()
    }

    /// Location shown in listings.
    ///
    /// The published location wins, followed by the online
    /// marker, the preset location and finally the municipality.
    pub fn location_label(&self) -> Option<String> {
        if let Some(location) = &self.location {
            return Some(location.clone());
        }
        match &self.venue {
            Venue::Online => Some(ONLINE_LOCATION_LABEL.to_owned()),
            Venue::Physical(site) => site.area.as_ref().map(ToString::to_string),
        }
    }

    pub fn has_any_type<'a>(&self, types: impl IntoIterator<Item = &'a str>) -> bool {
        types
            .into_iter()
            .any(|t| self.types.iter().any(|own| own == t))
    }

    pub fn has_any_keyword<'a>(&self, keywords: impl IntoIterator<Item = &'a str>) -> bool {
        keywords
            .into_iter()
            .any(|k| self.keywords.iter().any(|own| own == k))
    }
}

/// Origin of a crawled event.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub calendar_url : Option<Url>,
    pub event_url    : Option<Url>,
    pub fetched_at   : Option<DateTime>,
}

/// A single date range of an event.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub start_date : Date,
    pub start_time : Option<Time>,
    pub end_date   : Option<Date>,
    pub end_time   : Option<Time>,
}

impl Occurrence {
    pub const fn on(start_date: Date) -> Self {
        Self {
            start_date,
            start_time: None,
            end_date: None,
            end_time: None,
        }
    }

    /// Effective start, a missing time means the start of the day.
    pub fn start(&self) -> DateTime {
        DateTime::new(self.start_date, self.start_time.unwrap_or(START_OF_DAY))
    }

    /// Effective end, a missing date means the start date and
    /// a missing time means the end of the day.
    pub fn end(&self) -> DateTime {
        DateTime::new(
            self.end_date.unwrap_or(self.start_date),
            self.end_time.unwrap_or(END_OF_DAY),
        )
    }

    pub const fn start_label(&self) -> DateLabel {
        DateLabel {
            date: self.start_date,
            time: self.start_time,
        }
    }

    /// Only occurrences with an explicit end date have an end label.
    pub fn end_label(&self) -> Option<DateLabel> {
        self.end_date.map(|date| DateLabel {
            date,
            time: self.end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MapPoint;
    use time::macros::{date, datetime, time};

    fn new_event(venue: Venue) -> Event {
        Event {
            id: "1".into(),
            title: "Concert".into(),
            summary: None,
            location: None,
            venue,
            occurrences: vec![Occurrence::on(date!(2024 - 06 - 01))],
            types: vec!["music".into()],
            keywords: vec![],
            organizer: None,
            source: Source::default(),
        }
    }

    #[test]
    fn occurrence_defaults() {
        let o = Occurrence::on(date!(2024 - 06 - 01));
        assert_eq!(o.start(), datetime!(2024-06-01 0:00));
        assert_eq!(o.end(), datetime!(2024-06-01 23:59));
        assert_eq!(o.end_label(), None);

        let o = Occurrence {
            start_time: Some(time!(18:00)),
            end_date: Some(date!(2024 - 06 - 03)),
            ..o
        };
        assert_eq!(o.start(), datetime!(2024-06-01 18:00));
        assert_eq!(o.end(), datetime!(2024-06-03 23:59));
        assert_eq!(o.start_label().to_string(), "2024-06-01 18:00");
        assert_eq!(o.end_label().unwrap().to_string(), "2024-06-03");
    }

    #[test]
    fn location_label_resolution_order() {
        let site = Site {
            pos: Some(MapPoint::from_lat_lng_deg(50.08, 14.43)),
            geocoded_pos: None,
            area: Some(Area::Municipality {
                municipality: "Praha".into(),
                district: "Hlavní město Praha".into(),
            }),
        };
        let mut event = new_event(Venue::Physical(site.clone()));
        assert_eq!(
            event.location_label().as_deref(),
            Some("Praha, Hlavní město Praha")
        );

        event.venue = Venue::Physical(Site {
            area: Some(Area::Default("Národní muzeum".into())),
            ..site.clone()
        });
        assert_eq!(event.location_label().as_deref(), Some("Národní muzeum"));

        event.venue = Venue::Online;
        assert_eq!(event.location_label().as_deref(), Some(ONLINE_LOCATION_LABEL));

        event.location = Some("Rudolfinum".into());
        assert_eq!(event.location_label().as_deref(), Some("Rudolfinum"));

        let event = new_event(Venue::Physical(Site::default()));
        assert_eq!(event.location_label(), None);
    }

    #[test]
    fn match_types_and_keywords() {
        let mut event = new_event(Venue::Online);
        event.keywords = vec!["jazz".into()];
        assert!(event.has_any_type(["sport", "music"]));
        assert!(!event.has_any_type(["sport"]));
        assert!(event.has_any_keyword(["jazz"]));
        assert!(!event.has_any_keyword(std::iter::empty()));
    }
}
