use super::prelude::*;
use crate::util::{
    time::{is_long_term, OverlapMode, TimeWindow},
    validate::Validate,
};

/// Circle around the searched position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: MapPoint,
    pub radius: Distance,
}

impl SearchArea {
    /// Positions exactly on the border are outside.
    pub fn distance_if_inside(&self, pos: MapPoint) -> Option<Distance> {
        let distance = MapPoint::distance(self.center, pos);
        (distance < self.radius).then_some(distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationFilter {
    #[default]
    Any,
    Online,
    /// Physical events only, optionally within a search area.
    Physical(Option<SearchArea>),
}

impl LocationFilter {
    pub fn admits(&self, venue: &Venue) -> bool {
        match self {
            Self::Any => true,
            Self::Online => venue.is_online(),
            Self::Physical(_) => !venue.is_online(),
        }
    }

    pub fn search_area(&self) -> Option<&SearchArea> {
        match self {
            Self::Physical(area) => area.as_ref(),
            _ => None,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub window    : TimeWindow,
    pub location  : LocationFilter,
    /// Any-match, empty means unrestricted.
    pub types     : Vec<String>,
    /// Any-match, empty means unrestricted.
    pub keywords  : Vec<String>,
    /// Admit occurrences that only overlap the window.
    pub ongoing   : bool,
    /// Admit occurrences lasting three weeks or longer.
    pub long_term : bool,
}

impl SearchCriteria {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            location: LocationFilter::Any,
            types: vec![],
            keywords: vec![],
            ongoing: false,
            long_term: false,
        }
    }

    pub fn overlap_mode(&self) -> OverlapMode {
        if self.ongoing {
            OverlapMode::Ongoing
        } else {
            OverlapMode::Contained
        }
    }

    fn admits_occurrence(&self, occurrence: &Occurrence) -> bool {
        let (start, end) = (occurrence.start(), occurrence.end());
        if !self.long_term && is_long_term(start, end) {
            return false;
        }
        self.window.admits(start, end, self.overlap_mode())
    }
}

/// Rejects inconsistent criteria before they are evaluated.
pub fn validate_criteria(criteria: &SearchCriteria) -> Result<()> {
    criteria.validate()?;
    Ok(())
}

/// One row per matching occurrence of an event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredEvent {
    pub event_id    : Id,
    pub title       : String,
    pub location    : Option<String>,
    pub occurrence  : Occurrence,
    pub start       : DateTime,
    pub end         : DateTime,
    pub start_label : String,
    pub end_label   : Option<String>,
    pub pos         : Option<MapPoint>,
    pub distance    : Option<Distance>,
}

/// One map marker per physical event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub event_id    : Id,
    pub pos         : MapPoint,
    pub title       : String,
    pub distance    : Option<Distance>,
    /// The matching occurrences, for a detail card.
    pub occurrences : Vec<Occurrence>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<FilteredEvent>,
    pub markers: Vec<Marker>,
}

/// Evaluates the criteria against all events.
///
/// The results keep the iteration order of the events and of their
/// occurrences. The first physical event without any position aborts
/// the search.
pub fn search_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    criteria: &SearchCriteria,
) -> Result<SearchOutcome> {
    let mut outcome = SearchOutcome::default();
    let mut events_count = 0;

    for event in events {
        events_count += 1;

        if !criteria.location.admits(&event.venue) {
            continue;
        }
        if !criteria.types.is_empty()
            && !event.has_any_type(criteria.types.iter().map(String::as_str))
        {
            continue;
        }
        if !criteria.keywords.is_empty()
            && !event.has_any_keyword(criteria.keywords.iter().map(String::as_str))
        {
            continue;
        }

        let occurrences: Vec<_> = event
            .occurrences
            .iter()
            .filter(|o| criteria.admits_occurrence(o))
            .copied()
            .collect();
        if occurrences.is_empty() {
            continue;
        }

        let placement = match &event.venue {
            Venue::Online => None,
            Venue::Physical(site) => {
                let Some(pos) = site.resolve_pos() else {
                    log::warn!("Event {} has no position", event.id);
                    return Err(Error::MissingPosition(event.id.clone()));
                };
                let distance = match criteria.location.search_area() {
                    Some(area) => match area.distance_if_inside(pos) {
                        Some(distance) => Some(distance),
                        None => continue,
                    },
                    None => None,
                };
                Some((pos, distance))
            }
        };

        let location = event.location_label();
        outcome
            .results
            .extend(occurrences.iter().map(|occurrence| FilteredEvent {
                event_id: event.id.clone(),
                title: event.title.clone(),
                location: location.clone(),
                occurrence: *occurrence,
                start: occurrence.start(),
                end: occurrence.end(),
                start_label: occurrence.start_label().to_string(),
                end_label: occurrence.end_label().map(|label| label.to_string()),
                pos: placement.map(|(pos, _)| pos),
                distance: placement.and_then(|(_, distance)| distance),
            }));
        if let Some((pos, distance)) = placement {
            outcome.markers.push(Marker {
                event_id: event.id.clone(),
                pos,
                title: event.title.clone(),
                distance,
                occurrences,
            });
        }
    }

    log::debug!(
        "Found {} occurrence(s) and {} marker(s) in {} event(s)",
        outcome.results.len(),
        outcome.markers.len(),
        events_count
    );
    Ok(outcome)
}
