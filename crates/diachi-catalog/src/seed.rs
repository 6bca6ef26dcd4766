//! The compiled-in seed data: every province, district, and ward the
//! catalog knows about.
//!
//! Seed order is observable: list and search operations return entries in
//! the order they appear here. Append new entries under the right section;
//! never reorder existing ones, since consumers may persist selector state
//! as positional snapshots of these lists.

use crate::division::{District, Province, Ward};

// ============================================================================
// PROVINCES
// ============================================================================

/// All provinces, in seed order.
pub const PROVINCES: &[Province] = &[
    Province { code: "HN", name: "Hà Nội" },
    Province { code: "HCM", name: "Thành phố Hồ Chí Minh" },
    Province { code: "DN", name: "Đà Nẵng" },
    Province { code: "HP", name: "Hải Phòng" },
    Province { code: "CT", name: "Cần Thơ" },
    Province { code: "BD", name: "Bình Dương" },
    Province { code: "KH", name: "Khánh Hòa" },
    Province { code: "LD", name: "Lâm Đồng" },
];

// ============================================================================
// DISTRICTS
// ============================================================================

/// All districts, grouped by province, in seed order.
pub const DISTRICTS: &[District] = &[
    // ── Hà Nội ────────────────────────────────────────────────────────────
    District { code: "HN-HK", name: "Hoàn Kiếm", province_code: "HN" },
    District { code: "HN-BD", name: "Ba Đình", province_code: "HN" },
    District { code: "HN-DD", name: "Đống Đa", province_code: "HN" },
    District { code: "HN-CG", name: "Cầu Giấy", province_code: "HN" },
    District { code: "HN-HBT", name: "Hai Bà Trưng", province_code: "HN" },
    District { code: "HN-TX", name: "Thanh Xuân", province_code: "HN" },

    // ── Thành phố Hồ Chí Minh ─────────────────────────────────────────────
    District { code: "HCM-Q1", name: "Quận 1", province_code: "HCM" },
    District { code: "HCM-Q3", name: "Quận 3", province_code: "HCM" },
    District { code: "HCM-Q4", name: "Quận 4", province_code: "HCM" },
    District { code: "HCM-Q5", name: "Quận 5", province_code: "HCM" },
    District { code: "HCM-Q7", name: "Quận 7", province_code: "HCM" },
    District { code: "HCM-Q10", name: "Quận 10", province_code: "HCM" },
    District { code: "HCM-TD", name: "Thủ Đức", province_code: "HCM" },
    District { code: "HCM-BT", name: "Bình Thạnh", province_code: "HCM" },
    District { code: "HCM-GV", name: "Gò Vấp", province_code: "HCM" },
    District { code: "HCM-PN", name: "Phú Nhuận", province_code: "HCM" },

    // ── Đà Nẵng ───────────────────────────────────────────────────────────
    District { code: "DN-HC", name: "Hải Châu", province_code: "DN" },
    District { code: "DN-TK", name: "Thanh Khê", province_code: "DN" },
    District { code: "DN-ST", name: "Sơn Trà", province_code: "DN" },
    District { code: "DN-NHS", name: "Ngũ Hành Sơn", province_code: "DN" },

    // ── Hải Phòng ─────────────────────────────────────────────────────────
    District { code: "HP-HB", name: "Hồng Bàng", province_code: "HP" },
    District { code: "HP-LC", name: "Lê Chân", province_code: "HP" },
    District { code: "HP-NQ", name: "Ngô Quyền", province_code: "HP" },

    // ── Cần Thơ ───────────────────────────────────────────────────────────
    District { code: "CT-NK", name: "Ninh Kiều", province_code: "CT" },
    District { code: "CT-BT", name: "Bình Thủy", province_code: "CT" },
    District { code: "CT-CR", name: "Cái Răng", province_code: "CT" },

    // ── Bình Dương ────────────────────────────────────────────────────────
    District { code: "BD-TDM", name: "Thủ Dầu Một", province_code: "BD" },
    District { code: "BD-DA", name: "Dĩ An", province_code: "BD" },
    District { code: "BD-TA", name: "Thuận An", province_code: "BD" },

    // ── Khánh Hòa ─────────────────────────────────────────────────────────
    District { code: "KH-NT", name: "Nha Trang", province_code: "KH" },
    District { code: "KH-CR", name: "Cam Ranh", province_code: "KH" },

    // ── Lâm Đồng ──────────────────────────────────────────────────────────
    District { code: "LD-DL", name: "Đà Lạt", province_code: "LD" },
    District { code: "LD-BL", name: "Bảo Lộc", province_code: "LD" },
];

// ============================================================================
// WARDS
// ============================================================================

/// Wards for the denser districts, grouped by district, in seed order.
///
/// Districts without entries here simply have no seeded wards yet; the
/// catalog treats an empty child list as a normal state, not an error.
pub const WARDS: &[Ward] = &[
    // ── HCM-Q1 (Quận 1) ───────────────────────────────────────────────────
    Ward { code: "HCM-Q1-BN", name: "Bến Nghé", district_code: "HCM-Q1" },
    Ward { code: "HCM-Q1-BT", name: "Bến Thành", district_code: "HCM-Q1" },
    Ward { code: "HCM-Q1-NT", name: "Nguyễn Thái Bình", district_code: "HCM-Q1" },
    Ward { code: "HCM-Q1-CL", name: "Cầu Ông Lãnh", district_code: "HCM-Q1" },

    // ── HCM-Q3 (Quận 3) ───────────────────────────────────────────────────
    Ward { code: "HCM-Q3-VTS", name: "Võ Thị Sáu", district_code: "HCM-Q3" },
    Ward { code: "HCM-Q3-P01", name: "Phường 1", district_code: "HCM-Q3" },
    Ward { code: "HCM-Q3-P04", name: "Phường 4", district_code: "HCM-Q3" },

    // ── HCM-BT (Bình Thạnh) ───────────────────────────────────────────────
    Ward { code: "HCM-BT-P01", name: "Phường 1", district_code: "HCM-BT" },
    Ward { code: "HCM-BT-P25", name: "Phường 25", district_code: "HCM-BT" },

    // ── HN-HK (Hoàn Kiếm) ─────────────────────────────────────────────────
    Ward { code: "HN-HK-HT", name: "Hàng Trống", district_code: "HN-HK" },
    Ward { code: "HN-HK-HB", name: "Hàng Bạc", district_code: "HN-HK" },
    Ward { code: "HN-HK-TT", name: "Tràng Tiền", district_code: "HN-HK" },
    Ward { code: "HN-HK-CD", name: "Cửa Đông", district_code: "HN-HK" },

    // ── HN-BD (Ba Đình) ───────────────────────────────────────────────────
    Ward { code: "HN-BD-DB", name: "Điện Biên", district_code: "HN-BD" },
    Ward { code: "HN-BD-KM", name: "Kim Mã", district_code: "HN-BD" },
    Ward { code: "HN-BD-NH", name: "Ngọc Hà", district_code: "HN-BD" },

    // ── DN-HC (Hải Châu) ──────────────────────────────────────────────────
    Ward { code: "DN-HC-TT", name: "Thạch Thang", district_code: "DN-HC" },
    Ward { code: "DN-HC-HC1", name: "Hải Châu 1", district_code: "DN-HC" },
    Ward { code: "DN-HC-BH", name: "Bình Hiên", district_code: "DN-HC" },

    // ── CT-NK (Ninh Kiều) ─────────────────────────────────────────────────
    Ward { code: "CT-NK-TA", name: "Tân An", district_code: "CT-NK" },
    Ward { code: "CT-NK-XK", name: "Xuân Khánh", district_code: "CT-NK" },

    // ── KH-NT (Nha Trang) ─────────────────────────────────────────────────
    Ward { code: "KH-NT-LT", name: "Lộc Thọ", district_code: "KH-NT" },
    Ward { code: "KH-NT-VT", name: "Vạn Thạnh", district_code: "KH-NT" },
];
