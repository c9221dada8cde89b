mod associate_types;
mod collect_vocabulary;
mod draw_map;
mod error;
mod locate_search_center;
mod search_events;

#[cfg(test)]
pub mod tests;

pub use self::{
    associate_types::*, collect_vocabulary::*, draw_map::*, error::Error,
    locate_search_center::*, search_events::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use eventmap_entities::{event::*, geo::*, id::*, location::*, time::*};
}
