//! Domain logic for the Folio studio CMS.
//!
//! Zero internal dependencies: constants, enums, validation and pure helpers
//! shared by the repository layer and the HTTP API, plus the object store
//! abstraction that uploaded media is written through.

pub mod error;
pub mod media;
pub mod page_content;
pub mod portfolio;
pub mod storage;
pub mod types;
