use crate::geo::*;
use std::fmt;

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq)]
pub enum Venue {
    Online,
    Physical(Site),
}

impl Venue {
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }

    pub const fn site(&self) -> Option<&Site> {
        match self {
            Self::Online => None,
            Self::Physical(site) => Some(site),
        }
    }
}

/// Position data of a physical venue.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Site {
    /// Coordinate published by the source itself.
    pub pos          : Option<MapPoint>,
    /// Coordinate derived from the textual location.
    pub geocoded_pos : Option<MapPoint>,
    pub area         : Option<Area>,
}

impl Site {
    /// The published coordinate, falling back to the geocoded one.
    pub fn resolve_pos(&self) -> Option<MapPoint> {
        self.pos.or(self.geocoded_pos)
    }
}

/// Coarse textual location of a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Area {
    /// Preset location, e.g. the default location of the calendar.
    Default(String),
    Municipality {
        municipality: String,
        district: String,
    },
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Default(location) => f.write_str(location),
            Self::Municipality {
                municipality,
                district,
            } => write!(f, "{municipality}, {district}"),
        }
    }
}
