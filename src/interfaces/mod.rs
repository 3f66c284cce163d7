// ============================================================================
// Interfaces Module
// Text encodings and ingestion at the edges of the number type
// ============================================================================
//
// - scientific: display primitive and scientific-notation parsing
// - plain: integer-part rendering for the presentation layer
// - storage: persisted text contract with the save layer
// - ingest: polymorphic construction from raw caller quantities

pub mod ingest;
pub mod plain;
pub mod scientific;
pub mod storage;

#[cfg(feature = "serde")]
mod serde_impl;

pub use ingest::NumericInput;
pub use scientific::INFINITY_TEXT;
pub use storage::STORAGE_PREFIX;
