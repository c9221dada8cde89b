//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # eventmap-entities
//!
//! Reusable, agnostic domain entities for eventmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod event;
pub mod geo;
pub mod id;
pub mod location;
pub mod time;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
