//! vault-domain
//!
//! Pure domain models for the partner vault (milestones, budgets, love
//! languages, catalogs, submission payload and stored profile shapes).
//! No I/O, no UI, no storage. Only data types, lookups and calendar helpers.

pub mod budget;
pub mod calendar;
pub mod catalog;
pub mod common;
pub mod holiday;
pub mod love_language;
pub mod milestone;
pub mod profile;

pub use budget::*;
pub use calendar::*;
pub use catalog::*;
pub use common::*;
pub use holiday::*;
pub use love_language::*;
pub use milestone::*;
pub use profile::*;
