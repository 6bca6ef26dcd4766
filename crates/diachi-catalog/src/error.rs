use thiserror::Error;

/// Seed-integrity faults detected by [`crate::DivisionCatalog::validate`].
///
/// Query operations never produce these: an unmatched code is a normal
/// outcome (empty list or `None`). A `CatalogError` means the compiled-in
/// seed itself is malformed, which is a defect caught before ship.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate {kind} code: {code}")]
    DuplicateCode {
        kind: &'static str,
        code: &'static str,
    },
    #[error("district {district} references unknown province {province}")]
    DanglingDistrict {
        district: &'static str,
        province: &'static str,
    },
    #[error("ward {ward} references unknown district {district}")]
    DanglingWard {
        ward: &'static str,
        district: &'static str,
    },
}
