//! Loads bracket schedules supplied as CSV into [`tax_core::BracketTables`].

mod loader;

pub use loader::{BracketTableLoader, BracketTableLoaderError, BracketTableRecord};
