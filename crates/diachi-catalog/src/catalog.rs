//! Query interface over the compiled-in division catalog.
//!
//! `DivisionCatalog` indexes the seed arrays once at construction and then
//! answers every query from those indexes: exact code lookups, parent-scoped
//! child lists for cascading selectors, and case-insensitive substring
//! search. All data is `'static` and immutable, so the catalog is freely
//! shareable across threads without locking.
//!
//! # Usage
//!
//! ```
//! use diachi_catalog::DivisionCatalog;
//!
//! let catalog = DivisionCatalog::global();
//!
//! let districts = catalog.districts_of("HCM");
//! assert_eq!(districts.len(), 10);
//!
//! let wards = catalog.wards_of("HCM-Q1");
//! assert_eq!(wards[0].name, "Bến Nghé");
//!
//! assert!(catalog.province("ZZ").is_none());
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::division::{District, Province, Ward};
use crate::error::CatalogError;
use crate::seed::{DISTRICTS, PROVINCES, WARDS};

/// A ward resolved to its full path up the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WardAncestry {
    pub ward: &'static Ward,
    pub district: &'static District,
    pub province: &'static Province,
}

/// Lookup and filter access to the three-tier division catalog.
///
/// Built from the static seed arrays. Child lists preserve seed order,
/// which is the order consumers render selector options in.
pub struct DivisionCatalog {
    province_by_code: BTreeMap<&'static str, &'static Province>,
    district_by_code: BTreeMap<&'static str, &'static District>,
    ward_by_code: BTreeMap<&'static str, &'static Ward>,
    districts_by_province: BTreeMap<&'static str, Vec<&'static District>>,
    wards_by_district: BTreeMap<&'static str, Vec<&'static Ward>>,
}

impl DivisionCatalog {
    /// Build the catalog indexes from the seed arrays.
    ///
    /// Infallible: indexing is a single linear pass. Seed integrity is a
    /// separate concern, checked by [`DivisionCatalog::validate`].
    pub fn new() -> Self {
        let mut province_by_code = BTreeMap::new();
        let mut district_by_code = BTreeMap::new();
        let mut ward_by_code = BTreeMap::new();
        let mut districts_by_province: BTreeMap<&'static str, Vec<&'static District>> =
            BTreeMap::new();
        let mut wards_by_district: BTreeMap<&'static str, Vec<&'static Ward>> = BTreeMap::new();

        for province in PROVINCES {
            province_by_code.insert(province.code, province);
        }
        for district in DISTRICTS {
            district_by_code.insert(district.code, district);
            districts_by_province
                .entry(district.province_code)
                .or_default()
                .push(district);
        }
        for ward in WARDS {
            ward_by_code.insert(ward.code, ward);
            wards_by_district
                .entry(ward.district_code)
                .or_default()
                .push(ward);
        }

        debug!(
            provinces = PROVINCES.len(),
            districts = DISTRICTS.len(),
            wards = WARDS.len(),
            "division catalog indexed"
        );

        Self {
            province_by_code,
            district_by_code,
            ward_by_code,
            districts_by_province,
            wards_by_district,
        }
    }

    /// Get the process-wide catalog instance, built lazily on first access.
    pub fn global() -> &'static DivisionCatalog {
        static INSTANCE: OnceLock<DivisionCatalog> = OnceLock::new();
        INSTANCE.get_or_init(DivisionCatalog::new)
    }

    // ------------------------------------------------------------------
    // List operations (cascading selectors)
    // ------------------------------------------------------------------

    /// All provinces, in seed order.
    pub fn provinces(&self) -> Vec<&'static Province> {
        PROVINCES.iter().collect()
    }

    /// All districts of the given province, in seed order.
    ///
    /// Unknown or childless province codes yield an empty list.
    pub fn districts_of(&self, province_code: &str) -> Vec<&'static District> {
        self.districts_by_province
            .get(province_code)
            .cloned()
            .unwrap_or_default()
    }

    /// All wards of the given district, in seed order.
    ///
    /// Unknown or childless district codes yield an empty list.
    pub fn wards_of(&self, district_code: &str) -> Vec<&'static Ward> {
        self.wards_by_district
            .get(district_code)
            .cloned()
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Exact lookups
    // ------------------------------------------------------------------

    /// Look up a province by its code.
    pub fn province(&self, code: &str) -> Option<&'static Province> {
        self.province_by_code.get(code).copied()
    }

    /// Look up a district by its code.
    pub fn district(&self, code: &str) -> Option<&'static District> {
        self.district_by_code.get(code).copied()
    }

    /// Look up a ward by its code.
    pub fn ward(&self, code: &str) -> Option<&'static Ward> {
        self.ward_by_code.get(code).copied()
    }

    /// Resolve a ward code to its full province/district/ward path.
    ///
    /// Returns `None` when the ward code is unknown. Useful for rebuilding
    /// all three selector states from a single stored ward code.
    pub fn ward_ancestry(&self, ward_code: &str) -> Option<WardAncestry> {
        let ward = self.ward(ward_code)?;
        let district = self.district(ward.district_code)?;
        let province = self.province(district.province_code)?;
        Some(WardAncestry {
            ward,
            district,
            province,
        })
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Provinces whose name contains `query`, case-insensitively.
    ///
    /// An empty query matches every province. Results keep catalog order.
    pub fn search_provinces(&self, query: &str) -> Vec<&'static Province> {
        let needle = query.to_lowercase();
        PROVINCES
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Districts of `province_code` whose name contains `query`,
    /// case-insensitively.
    ///
    /// Both predicates must hold: the result is exactly
    /// [`districts_of`](Self::districts_of) narrowed by the substring match.
    pub fn search_districts(&self, province_code: &str, query: &str) -> Vec<&'static District> {
        let needle = query.to_lowercase();
        match self.districts_by_province.get(province_code) {
            Some(districts) => districts
                .iter()
                .filter(|d| d.name.to_lowercase().contains(&needle))
                .copied()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Wards of `district_code` whose name contains `query`,
    /// case-insensitively.
    pub fn search_wards(&self, district_code: &str, query: &str) -> Vec<&'static Ward> {
        let needle = query.to_lowercase();
        match self.wards_by_district.get(district_code) {
            Some(wards) => wards
                .iter()
                .filter(|w| w.name.to_lowercase().contains(&needle))
                .copied()
                .collect(),
            None => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Introspection and integrity
    // ------------------------------------------------------------------

    /// Total number of records across all three tiers.
    pub fn len(&self) -> usize {
        self.province_by_code.len() + self.district_by_code.len() + self.ward_by_code.len()
    }

    /// Whether the catalog holds no records (it never should).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the seed against the catalog invariants: codes unique within
    /// each tier, every district's province exists, every ward's district
    /// exists.
    ///
    /// Returns the first violation found. A failure here is a defect in
    /// the seed arrays, not a runtime condition.
    pub fn validate() -> Result<(), CatalogError> {
        let mut province_codes = std::collections::BTreeSet::new();
        for province in PROVINCES {
            if !province_codes.insert(province.code) {
                return Err(CatalogError::DuplicateCode {
                    kind: "province",
                    code: province.code,
                });
            }
        }

        let mut district_codes = std::collections::BTreeSet::new();
        for district in DISTRICTS {
            if !district_codes.insert(district.code) {
                return Err(CatalogError::DuplicateCode {
                    kind: "district",
                    code: district.code,
                });
            }
            if !province_codes.contains(district.province_code) {
                return Err(CatalogError::DanglingDistrict {
                    district: district.code,
                    province: district.province_code,
                });
            }
        }

        let mut ward_codes = std::collections::BTreeSet::new();
        for ward in WARDS {
            if !ward_codes.insert(ward.code) {
                return Err(CatalogError::DuplicateCode {
                    kind: "ward",
                    code: ward.code,
                });
            }
            if !district_codes.contains(ward.district_code) {
                return Err(CatalogError::DanglingWard {
                    ward: ward.code,
                    district: ward.district_code,
                });
            }
        }

        Ok(())
    }
}

impl Default for DivisionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
