// ============================================================================
// Domain Module
// Configuration shared by the systems that create numbers
// ============================================================================

pub mod config;

pub use config::BigNumConfig;
