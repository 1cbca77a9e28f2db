//! Property description record.

use crate::category::{Categorical, District, HeatingType, OccupancyStatus, parse_level};
use crate::error::{RecordError, Result};
use crate::registry::{columns, get_field_info};
use serde::{Deserialize, Serialize};

/// One property's attributes at estimation time.
///
/// Categorical fields hold the raw level label rather than the typed
/// enumeration, so a record can carry a level the model never saw. Such a
/// level fails [`PropertyRecord::validate`] but still encodes; its one-hot
/// column is simply dropped during alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    /// District label
    pub district: String,
    /// Gross area in square meters
    pub gross_area: f64,
    /// Net area in square meters
    pub net_area: f64,
    /// Room count
    pub rooms: u32,
    /// Building age in years
    pub building_age: u32,
    /// Floor the unit is on
    pub floor: u32,
    /// Floors in the building
    pub building_floors: u32,
    /// Bathroom count
    pub bathrooms: u32,
    /// Has a balcony
    pub has_balcony: bool,
    /// Building has an elevator
    pub has_elevator: bool,
    /// Sold furnished
    pub furnished: bool,
    /// Eligible for a mortgage
    pub mortgage_eligible: bool,
    /// Has parking
    pub has_parking: bool,
    /// Heating type label
    pub heating: String,
    /// Occupancy status label
    pub occupancy: String,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            district: District::default().label().to_string(),
            gross_area: 100.0,
            net_area: 85.0,
            rooms: 3,
            building_age: 5,
            floor: 2,
            building_floors: 5,
            bathrooms: 1,
            has_balcony: true,
            has_elevator: true,
            furnished: false,
            mortgage_eligible: true,
            has_parking: true,
            heating: HeatingType::default().label().to_string(),
            occupancy: OccupancyStatus::default().label().to_string(),
        }
    }
}

impl PropertyRecord {
    /// Set the district.
    pub fn with_district(mut self, district: District) -> Self {
        self.district = district.label().to_string();
        self
    }

    /// Set the heating type.
    pub fn with_heating(mut self, heating: HeatingType) -> Self {
        self.heating = heating.label().to_string();
        self
    }

    /// Set the occupancy status.
    pub fn with_occupancy(mut self, occupancy: OccupancyStatus) -> Self {
        self.occupancy = occupancy.label().to_string();
        self
    }

    /// Set gross and net area.
    pub const fn with_area(mut self, gross: f64, net: f64) -> Self {
        self.gross_area = gross;
        self.net_area = net;
        self
    }

    /// Scalar fields in flatten order, flags as 0/1.
    pub fn scalar_fields(&self) -> [(&'static str, f64); 12] {
        let flag = |b: bool| f64::from(u8::from(b));
        [
            (columns::GROSS_AREA, self.gross_area),
            (columns::NET_AREA, self.net_area),
            (columns::ROOMS, f64::from(self.rooms)),
            (columns::BUILDING_AGE, f64::from(self.building_age)),
            (columns::FLOOR, f64::from(self.floor)),
            (columns::BUILDING_FLOORS, f64::from(self.building_floors)),
            (columns::BATHROOMS, f64::from(self.bathrooms)),
            (columns::BALCONY, flag(self.has_balcony)),
            (columns::ELEVATOR, flag(self.has_elevator)),
            (columns::FURNISHED, flag(self.furnished)),
            (columns::MORTGAGE_ELIGIBLE, flag(self.mortgage_eligible)),
            (columns::PARKING, flag(self.has_parking)),
        ]
    }

    /// Categorical fields as (column prefix, raw level), in flatten order.
    pub fn categorical_fields(&self) -> [(&'static str, &str); 3] {
        [
            (District::FIELD, self.district.as_str()),
            (OccupancyStatus::FIELD, self.occupancy.as_str()),
            (HeatingType::FIELD, self.heating.as_str()),
        ]
    }

    /// Typed district, if the label is a known level.
    pub fn district_level(&self) -> Result<District> {
        parse_level(&self.district)
    }

    /// Typed heating type, if the label is a known level.
    pub fn heating_level(&self) -> Result<HeatingType> {
        parse_level(&self.heating)
    }

    /// Typed occupancy status, if the label is a known level.
    pub fn occupancy_level(&self) -> Result<OccupancyStatus> {
        parse_level(&self.occupancy)
    }

    /// Check every field against the registry bounds and enumerations.
    ///
    /// Returns the first violation found, scalar fields first.
    pub fn validate(&self) -> Result<()> {
        for (column, value) in self.scalar_fields() {
            if let Some(info) = get_field_info(column) {
                if !info.contains(value) {
                    return Err(RecordError::OutOfBounds {
                        field: info.column,
                        value,
                        min: info.min,
                        max: info.max,
                    });
                }
            }
        }

        self.district_level()?;
        self.occupancy_level()?;
        self.heating_level()?;
        Ok(())
    }

    /// Copy of this record with categorical labels replaced by their
    /// canonical spelling where they parse.
    pub fn canonicalized(&self) -> Self {
        let mut out = self.clone();
        if let Ok(level) = self.district_level() {
            out.district = level.label().to_string();
        }
        if let Ok(level) = self.heating_level() {
            out.heating = level.label().to_string();
        }
        if let Ok(level) = self.occupancy_level() {
            out.occupancy = level.label().to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_valid() {
        let record = PropertyRecord::default();
        assert!(record.validate().is_ok());
        assert_eq!(record.district, "Adalar");
        assert_eq!(record.heating, "Kombi");
        assert_eq!(record.occupancy, "Mülk Sahibi Oturuyor");
    }

    #[test]
    fn test_scalar_fields_order_and_flags() {
        let record = PropertyRecord {
            furnished: true,
            has_parking: false,
            ..Default::default()
        };
        let fields = record.scalar_fields();
        assert_eq!(fields[0], ("m2_gross", 100.0));
        assert_eq!(fields[6], ("banyo_sayisi", 1.0));
        assert_eq!(fields[9], ("esyali_mi", 1.0));
        assert_eq!(fields[11], ("otopark", 0.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let record = PropertyRecord {
            rooms: 11,
            ..Default::default()
        };
        assert_eq!(
            record.validate(),
            Err(RecordError::OutOfBounds {
                field: "oda_sayisi",
                value: 11.0,
                min: 1.0,
                max: 10.0,
            })
        );
    }

    #[test]
    fn test_unknown_district_fails_validation() {
        let record = PropertyRecord {
            district: "Çankaya".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            record.validate(),
            Err(RecordError::UnknownLevel { field: "ilce", .. })
        ));
    }

    #[test]
    fn test_canonicalized() {
        let record = PropertyRecord {
            district: "kadikoy".to_string(),
            heating: "merkezi-sistem".to_string(),
            occupancy: "Nowhere".to_string(),
            ..Default::default()
        };
        let canonical = record.canonicalized();
        assert_eq!(canonical.district, "Kadıköy");
        assert_eq!(canonical.heating, "Merkezi Sistem");
        assert_eq!(canonical.occupancy, "Nowhere");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let record: PropertyRecord =
            serde_json::from_str(r#"{"district":"Fatih","rooms":2}"#).unwrap();
        assert_eq!(record.district, "Fatih");
        assert_eq!(record.rooms, 2);
        assert_eq!(record.gross_area, 100.0);
        assert!(record.has_elevator);
    }
}
