//! Harvest the identifiers of a DSpace collection over OAI-PMH and turn
//! them into record-view links.

pub mod collection;
pub mod config;
pub mod error;
pub mod oai;

pub use collection::{CollectionResult, sanitize_collection};
pub use config::HarvestConfig;
pub use error::{Error, Result};
pub use oai::identifier::IdentifierParts;
pub use oai::pmh::{Harvester, Page, Resumption};
