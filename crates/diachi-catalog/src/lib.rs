//! # diachi-catalog
//!
//! Compiled-in catalog of Vietnamese administrative divisions for cascading
//! address selectors: province → district → ward.
//!
//! The catalog is a fixed, read-only lookup table. A form layer calls
//! [`DivisionCatalog::provinces`] to fill the top selector, then
//! [`DivisionCatalog::districts_of`] and [`DivisionCatalog::wards_of`] as
//! the user narrows the selection, and optionally the `search_*` operations
//! to filter long lists by typed text. Unknown codes yield empty results,
//! never errors.
//!
//! ## Quick Start
//!
//! ```
//! use diachi_catalog::DivisionCatalog;
//!
//! let catalog = DivisionCatalog::global();
//!
//! // Top selector.
//! let provinces = catalog.provinces();
//!
//! // User picked a province: repopulate the district selector.
//! let districts = catalog.districts_of("HCM");
//! assert_eq!(districts.len(), 10);
//!
//! // User typed into the search box.
//! let hits = catalog.search_districts("HCM", "phú");
//! assert_eq!(hits[0].name, "Phú Nhuận");
//! ```

pub mod catalog;
pub mod division;
pub mod error;
pub mod seed;

pub use catalog::{DivisionCatalog, WardAncestry};
pub use division::{District, Province, Ward};
pub use error::CatalogError;
