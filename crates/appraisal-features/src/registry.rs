//! Field Registry
//!
//! Static description of every scalar field of a property record: the column
//! it is emitted under, its encoding, and the bounds and default the input
//! surface applies.

use std::collections::HashMap;

/// Column names of the scalar fields, in flatten order.
pub mod columns {
    /// Gross area in square meters
    pub const GROSS_AREA: &str = "m2_gross";
    /// Net area in square meters
    pub const NET_AREA: &str = "m2_net";
    /// Room count
    pub const ROOMS: &str = "oda_sayisi";
    /// Building age in years
    pub const BUILDING_AGE: &str = "bina_yasi";
    /// Floor the unit is on
    pub const FLOOR: &str = "bulundugu_kat";
    /// Number of floors in the building
    pub const BUILDING_FLOORS: &str = "kat_sayisi";
    /// Bathroom count
    pub const BATHROOMS: &str = "banyo_sayisi";
    /// Balcony flag
    pub const BALCONY: &str = "balkon";
    /// Elevator flag
    pub const ELEVATOR: &str = "asansor";
    /// Furnished flag
    pub const FURNISHED: &str = "esyali_mi";
    /// Mortgage eligibility flag
    pub const MORTGAGE_ELIGIBLE: &str = "krediye_uygun";
    /// Parking flag
    pub const PARKING: &str = "otopark";
}

/// How a field is turned into model input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Bounded number, passed through as-is
    Numeric,
    /// Boolean, encoded as 0 or 1
    Flag,
}

/// Field metadata
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Column name (unique identifier)
    pub column: &'static str,
    /// Field encoding
    pub kind: FieldKind,
    /// Brief description of the field
    pub description: &'static str,
    /// Inclusive lower bound (0 for flags)
    pub min: f64,
    /// Inclusive upper bound (1 for flags)
    pub max: f64,
    /// Value the input surface starts from
    pub default: f64,
}

impl FieldInfo {
    const fn numeric(
        column: &'static str,
        description: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            column,
            kind: FieldKind::Numeric,
            description,
            min,
            max,
            default,
        }
    }

    const fn flag(column: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            column,
            kind: FieldKind::Flag,
            description,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
        }
    }

    /// Whether `value` lies within the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Get all scalar fields, in flatten order
pub fn available_fields() -> Vec<FieldInfo> {
    vec![
        FieldInfo::numeric(columns::GROSS_AREA, "Gross area (m²)", 40.0, 1000.0, 100.0),
        FieldInfo::numeric(columns::NET_AREA, "Net area (m²)", 30.0, 900.0, 85.0),
        FieldInfo::numeric(columns::ROOMS, "Number of rooms", 1.0, 10.0, 3.0),
        FieldInfo::numeric(columns::BUILDING_AGE, "Building age in years", 0.0, 50.0, 5.0),
        FieldInfo::numeric(columns::FLOOR, "Floor of the unit", 0.0, 50.0, 2.0),
        FieldInfo::numeric(
            columns::BUILDING_FLOORS,
            "Floors in the building",
            1.0,
            50.0,
            5.0,
        ),
        FieldInfo::numeric(columns::BATHROOMS, "Number of bathrooms", 1.0, 4.0, 1.0),
        FieldInfo::flag(columns::BALCONY, "Has a balcony", true),
        FieldInfo::flag(columns::ELEVATOR, "Building has an elevator", true),
        FieldInfo::flag(columns::FURNISHED, "Sold furnished", false),
        FieldInfo::flag(columns::MORTGAGE_ELIGIBLE, "Eligible for a mortgage", true),
        FieldInfo::flag(columns::PARKING, "Has parking", true),
    ]
}

/// Get fields by kind
pub fn fields_by_kind(kind: FieldKind) -> Vec<FieldInfo> {
    available_fields()
        .into_iter()
        .filter(|f| f.kind == kind)
        .collect()
}

/// Get field info by column name
pub fn get_field_info(column: &str) -> Option<FieldInfo> {
    available_fields().into_iter().find(|f| f.column == column)
}

/// Get a map of all fields indexed by column name
pub fn field_map() -> HashMap<&'static str, FieldInfo> {
    available_fields()
        .into_iter()
        .map(|f| (f.column, f))
        .collect()
}

/// List all scalar column names, in flatten order
pub fn list_columns() -> Vec<&'static str> {
    available_fields().into_iter().map(|f| f.column).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_fields_count() {
        // 7 numeric fields and 5 flags
        assert_eq!(available_fields().len(), 12);
        assert_eq!(fields_by_kind(FieldKind::Numeric).len(), 7);
        assert_eq!(fields_by_kind(FieldKind::Flag).len(), 5);
    }

    #[test]
    fn test_get_field_info() {
        let rooms = get_field_info("oda_sayisi").unwrap();
        assert_eq!(rooms.kind, FieldKind::Numeric);
        assert_eq!(rooms.min, 1.0);
        assert_eq!(rooms.max, 10.0);
        assert!(get_field_info("ilce").is_none());
    }

    #[test]
    fn test_field_map_matches_list() {
        let map = field_map();
        assert_eq!(map.len(), list_columns().len());
        assert!(map.contains_key("otopark"));
    }

    #[test]
    fn test_defaults_within_bounds() {
        for field in available_fields() {
            assert!(
                field.contains(field.default),
                "default of {} outside its bounds",
                field.column
            );
        }
    }

    #[test]
    fn test_flag_defaults() {
        assert_eq!(get_field_info(columns::FURNISHED).unwrap().default, 0.0);
        assert_eq!(get_field_info(columns::PARKING).unwrap().default, 1.0);
    }
}
