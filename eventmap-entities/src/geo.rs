use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// Geographical position in WGS84 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let (lat, lng) = (lat.into(), lng.into());
        debug_assert!((LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat));
        debug_assert!((LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng));
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        if (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
        {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Longitude(lng_deg_str.to_owned()))?;
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat_deg) {
            return Err(MapPointParseError::Latitude(lat_deg_str.to_owned()));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng_deg) {
            return Err(MapPointParseError::Longitude(lng_deg_str.to_owned()));
        }
        Ok(Self::from_lat_lng_deg(lat_deg, lng_deg))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses the `"<lat>,<lng>"` notation used by the crawled datasets.
impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_owned()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_kilometers(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.2} km", self.to_kilometers())
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth with the haversine formula.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding may push `a` slightly out of [0, 1] near antipodes
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c)
    }
}

/// Axis-aligned bounding box, used for fitting a map viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest box that encloses all points.
    ///
    /// Boxes crossing the antimeridian are not supported.
    pub fn enclosing(points: impl IntoIterator<Item = MapPoint>) -> Option<Self> {
        points.into_iter().fold(None, |bbox, pt| {
            let Some(MapBbox { sw, ne }) = bbox else {
                return Some(Self::new(pt, pt));
            };
            Some(Self::new(
                MapPoint::from_lat_lng_deg(sw.lat.min(pt.lat), sw.lng.min(pt.lng)),
                MapPoint::from_lat_lng_deg(ne.lat.max(pt.lat), ne.lng.max(pt.lng)),
            ))
        })
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
