use super::*;
use eventmap_core::usecases as uc;
use eventmap_entities as e;
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid event id '{0}'")]
    Id(String),
    #[error("Invalid position '{value}' of event {id}: {source}")]
    Position {
        id: String,
        value: String,
        source: e::geo::MapPointParseError,
    },
    #[error("Invalid date or time of event {id}: {source}")]
    Time {
        id: String,
        source: e::time::TimeParseError,
    },
    #[error("Invalid URL '{value}' of event {id}: {source}")]
    Url {
        id: String,
        value: String,
        source: e::url::ParseError,
    },
}

/// A dataset record together with its key.
#[derive(Debug, Clone)]
pub struct DatasetEntry {
    pub id: String,
    pub data: EventData,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

fn parse_pos(id: &str, gps: Option<String>) -> Result<Option<e::geo::MapPoint>, ConversionError> {
    non_blank(gps)
        .map(|value| {
            value
                .parse::<e::geo::MapPoint>()
                .map_err(|source| ConversionError::Position {
                    id: id.to_owned(),
                    value,
                    source,
                })
        })
        .transpose()
}

fn parse_url(id: &str, url: Option<String>) -> Result<Option<e::url::Url>, ConversionError> {
    non_blank(url)
        .map(|value| {
            e::url::Url::parse(value.trim()).map_err(|source| ConversionError::Url {
                id: id.to_owned(),
                value,
                source,
            })
        })
        .transpose()
}

fn parse_occurrence(
    (start_date, start_time, end_date, end_time): DatetimeTuple,
) -> Result<e::event::Occurrence, e::time::TimeParseError> {
    use e::time::{parse_date, parse_time};
    Ok(e::event::Occurrence {
        start_date: parse_date(&start_date)?,
        start_time: non_blank(start_time).as_deref().map(parse_time).transpose()?,
        end_date: non_blank(end_date).as_deref().map(parse_date).transpose()?,
        end_time: non_blank(end_time).as_deref().map(parse_time).transpose()?,
    })
}

fn area(
    has_default: bool,
    default_location: Option<String>,
    municipality: Option<String>,
    district: Option<String>,
) -> Option<e::location::Area> {
    use e::location::Area;
    if has_default {
        if let Some(location) = default_location {
            return Some(Area::Default(location));
        }
    }
    match (municipality, district) {
        (Some(municipality), Some(district)) => Some(Area::Municipality {
            municipality,
            district,
        }),
        (Some(municipality), None) => Some(Area::Default(municipality)),
        (None, _) => None,
    }
}

impl TryFrom<DatasetEntry> for e::event::Event {
    type Error = ConversionError;

    fn try_from(from: DatasetEntry) -> Result<Self, Self::Error> {
        let DatasetEntry { id, data } = from;
        let EventData {
            event_url,
            title,
            perex,
            location,
            gps,
            organizer,
            types,
            keywords,
            datetimes,
            online,
            has_default,
            geocoded_gps,
            default_location,
            municipality,
            district,
            calendar_url,
            calendar_downloaded_at,
        } = data;

        let event_id = e::id::Id::from(id.as_str());
        if !event_id.is_valid() {
            return Err(ConversionError::Id(id));
        }

        let venue = if online {
            e::location::Venue::Online
        } else {
            e::location::Venue::Physical(e::location::Site {
                pos: parse_pos(&id, gps)?,
                geocoded_pos: parse_pos(&id, geocoded_gps)?,
                area: area(
                    has_default,
                    non_blank(default_location),
                    non_blank(municipality),
                    non_blank(district),
                ),
            })
        };

        let mut occurrences = datetimes
            .into_iter()
            .map(parse_occurrence)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConversionError::Time {
                id: id.clone(),
                source,
            })?;
        occurrences.sort_by_key(|o| (o.start(), o.end()));
        occurrences.dedup();

        let fetched_at = non_blank(calendar_downloaded_at)
            .as_deref()
            .map(e::time::parse_timestamp)
            .transpose()
            .map_err(|source| ConversionError::Time {
                id: id.clone(),
                source,
            })?;
        let source = e::event::Source {
            calendar_url: parse_url(&id, calendar_url)?,
            event_url: parse_url(&id, event_url)?,
            fetched_at,
        };

        Ok(Self {
            id: event_id,
            title,
            summary: non_blank(perex),
            location: non_blank(location),
            venue,
            occurrences,
            types,
            keywords,
            organizer: non_blank(organizer),
            source,
        })
    }
}

/// Converts all records of a dataset, failing on the first invalid one.
pub fn events_from_dataset(
    dataset: EventsDataset,
) -> Result<BTreeMap<e::id::Id, e::event::Event>, ConversionError> {
    dataset
        .into_iter()
        .map(|(id, data)| {
            let event = e::event::Event::try_from(DatasetEntry { id, data })?;
            Ok((event.id.clone(), event))
        })
        .collect()
}

impl FromIterator<TypeDefinition> for uc::TypeHierarchy {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|TypeDefinition { event_type, supertypes }| (event_type, supertypes)),
        )
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<&uc::FilteredEvent> for EventRow {
    fn from(from: &uc::FilteredEvent) -> Self {
        let pos = from.pos.map(Coordinate::from);
        Self {
            id: from.event_id.to_string(),
            table_title: from.title.clone(),
            table_location: from.location.clone(),
            table_start_datetime: from.start_label.clone(),
            table_end_datetime: from.end_label.clone(),
            lat: pos.map(|c| c.lat),
            lng: pos.map(|c| c.lng),
            distance_km: from.distance.map(|d| d.to_kilometers()),
        }
    }
}

impl From<&e::event::Occurrence> for OccurrenceLabel {
    fn from(from: &e::event::Occurrence) -> Self {
        Self {
            start: from.start_label().to_string(),
            end: from.end_label().map(|label| label.to_string()),
        }
    }
}

impl From<&uc::Marker> for MapMarker {
    fn from(from: &uc::Marker) -> Self {
        let Coordinate { lat, lng } = from.pos.into();
        Self {
            id: from.event_id.to_string(),
            title: from.title.clone(),
            lat,
            lng,
            distance_km: from.distance.map(|d| d.to_kilometers()),
            occurrences: from.occurrences.iter().map(OccurrenceLabel::from).collect(),
        }
    }
}

impl From<&uc::SearchOutcome> for SearchResponse {
    fn from(from: &uc::SearchOutcome) -> Self {
        Self {
            results: from.results.iter().map(EventRow::from).collect(),
            markers: from.markers.iter().map(MapMarker::from).collect(),
        }
    }
}

impl From<uc::Vocabulary> for Vocabulary {
    fn from(from: uc::Vocabulary) -> Self {
        let uc::Vocabulary { types, keywords } = from;
        Self { types, keywords }
    }
}
