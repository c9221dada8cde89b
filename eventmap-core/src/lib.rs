pub mod gateways;
pub mod usecases;
pub mod util;

pub use self::gateways::{geocode::GeoCodingGateway, map::MapRenderer};
