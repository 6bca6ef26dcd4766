//! Integration tests for the cascading address-selector flow.
//!
//! Tests cover:
//! - Driving all three selector tiers off the catalog
//! - Search narrowing at each tier
//! - Rebuilding selector state from a stored ward code
//! - Search containment for prefixes taken from real names
//! - Serialization of records at the presentation boundary

use diachi_catalog::{DivisionCatalog, WardAncestry};

// ============================================================
// Scenario 1: Full selector cascade
// ============================================================

#[test]
fn test_cascade_from_province_to_ward() {
    let catalog = DivisionCatalog::global();

    // Top selector is populated with every province.
    let provinces = catalog.provinces();
    assert_eq!(provinces.len(), 8);

    // User picks Hà Nội: the district selector shows its districts only.
    let hanoi = provinces.iter().find(|p| p.code == "HN").unwrap();
    let districts = catalog.districts_of(hanoi.code);
    assert!(!districts.is_empty());
    assert!(districts.iter().all(|d| d.province_code == "HN"));

    // User picks Hoàn Kiếm: the ward selector shows its wards only.
    let hoan_kiem = districts.iter().find(|d| d.code == "HN-HK").unwrap();
    let wards = catalog.wards_of(hoan_kiem.code);
    assert!(!wards.is_empty());
    assert!(wards.iter().all(|w| w.district_code == "HN-HK"));
}

#[test]
fn test_switching_province_swaps_district_options() {
    let catalog = DivisionCatalog::global();

    let before = catalog.districts_of("HN");
    let after = catalog.districts_of("DN");

    // No district survives a province switch.
    for district in &after {
        assert!(!before.iter().any(|d| d.code == district.code));
    }
}

// ============================================================
// Scenario 2: Interactive search at each tier
// ============================================================

#[test]
fn test_search_narrows_selector_options() {
    let catalog = DivisionCatalog::global();

    let hits = catalog.search_provinces("hải");
    assert!(hits.iter().any(|p| p.code == "HP"));

    let hits = catalog.search_districts("HN", "cầu");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "HN-CG");

    let hits = catalog.search_wards("HN-HK", "hàng");
    let codes: Vec<&str> = hits.iter().map(|w| w.code).collect();
    assert_eq!(codes, ["HN-HK-HT", "HN-HK-HB"]);
}

#[test]
fn test_search_equals_client_side_filter() {
    let catalog = DivisionCatalog::global();

    for province in catalog.provinces() {
        for query in ["quận", "an", "đ", ""] {
            let via_search = catalog.search_districts(province.code, query);
            let via_filter: Vec<_> = catalog
                .districts_of(province.code)
                .into_iter()
                .filter(|d| d.name.to_lowercase().contains(query))
                .collect();
            assert_eq!(
                via_search, via_filter,
                "search mismatch for province {:?} query {:?}",
                province.code, query
            );
        }
    }
}

#[test]
fn test_name_prefix_queries_are_contained_in_results() {
    let catalog = DivisionCatalog::global();

    for province in catalog.provinces() {
        let prefix: String = province.name.chars().take(3).collect();
        let needle = prefix.to_lowercase();
        let hits = catalog.search_provinces(&prefix);
        assert!(
            hits.iter().any(|p| p.code == province.code),
            "province {:?} missing from results for its own prefix {:?}",
            province.code,
            prefix
        );
        for hit in hits {
            assert!(
                hit.name.to_lowercase().contains(&needle),
                "result {:?} does not contain query {:?}",
                hit.name,
                prefix
            );
        }
    }
}

// ============================================================
// Scenario 3: Restoring selector state
// ============================================================

#[test]
fn test_rebuild_selectors_from_stored_ward_code() {
    let catalog = DivisionCatalog::global();

    // A profile stored only the ward code of the user's address.
    let WardAncestry {
        ward,
        district,
        province,
    } = catalog.ward_ancestry("DN-HC-TT").unwrap();

    assert_eq!(province.code, "DN");
    assert_eq!(district.code, "DN-HC");
    assert_eq!(ward.name, "Thạch Thang");

    // The restored codes select real positions in the cascaded lists.
    assert!(catalog.districts_of(province.code).contains(&district));
    assert!(catalog.wards_of(district.code).contains(&ward));
}

// ============================================================
// Scenario 4: Presentation boundary
// ============================================================

#[test]
fn test_records_serialize_for_the_form_layer() {
    let catalog = DivisionCatalog::global();

    let province = catalog.province("HCM").unwrap();
    let json = serde_json::to_value(province).unwrap();
    assert_eq!(json["code"], "HCM");
    assert_eq!(json["name"], "Thành phố Hồ Chí Minh");

    let districts = catalog.districts_of("HCM");
    let json = serde_json::to_value(&districts).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 10);
    assert_eq!(json[0]["province_code"], "HCM");
}
