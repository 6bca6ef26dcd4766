//! Record types for the three tiers of the administrative hierarchy.
//!
//! All records are compiled into the binary as `&'static str` data and are
//! immutable for the lifetime of the process. Each tier carries the code of
//! its parent tier, which is what the cascading filters key on.
//!
//! The tiers are deliberately three distinct types rather than one
//! level-tagged entry: a `Vec<&District>` cannot accidentally contain a ward,
//! and a province code cannot be passed where a district code is expected
//! without the caller noticing at the call site.

use serde::Serialize;

/// Top tier: a province or centrally-governed city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Province {
    /// Unique short code, e.g. `"HCM"`.
    pub code: &'static str,
    /// Display name, e.g. `"Thành phố Hồ Chí Minh"`.
    pub name: &'static str,
}

/// Middle tier: an urban district or district-level town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct District {
    /// Unique code, prefixed by the province code, e.g. `"HCM-Q1"`.
    pub code: &'static str,
    /// Display name, e.g. `"Quận 1"`.
    pub name: &'static str,
    /// Code of the province this district belongs to.
    pub province_code: &'static str,
}

/// Bottom tier: a ward or commune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ward {
    /// Unique code, prefixed by the district code, e.g. `"HCM-Q1-BN"`.
    pub code: &'static str,
    /// Display name, e.g. `"Bến Nghé"`.
    pub name: &'static str,
    /// Code of the district this ward belongs to.
    pub district_code: &'static str,
}
