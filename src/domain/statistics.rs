// Statistics snapshot domain model
use serde::{Deserialize, Deserializer};

/// One pre-aggregated statistics payload as computed by the parking backend.
///
/// Missing fields decode to zero. Counts are signed so that inconsistent
/// upstream data still renders instead of failing to decode, and any JSON
/// number is accepted for them (`120.0` is `120`, fractions are floored).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSnapshot {
    #[serde(deserialize_with = "whole_number")]
    pub total_slots: i64,
    #[serde(deserialize_with = "whole_number")]
    pub available_slots: i64,
    #[serde(deserialize_with = "whole_number")]
    pub total_cars: i64,
    #[serde(deserialize_with = "whole_number")]
    pub active_parking: i64,
    /// Rwandan Francs, whole units.
    pub total_revenue: f64,
    /// Minutes.
    #[serde(deserialize_with = "whole_number")]
    pub average_duration: i64,
}

impl StatisticsSnapshot {
    /// `availableSlots <= totalSlots` and `activeParking <= totalCars`.
    pub fn is_consistent(&self) -> bool {
        self.available_slots <= self.total_slots && self.active_parking <= self.total_cars
    }
}

// Backends built on float-only number types send counts as `120.0`.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(whole) = value.as_i64() {
        return Ok(whole);
    }
    match value.as_f64() {
        Some(number) if number.is_finite() => Ok(number.floor() as i64),
        _ => Err(serde::de::Error::custom(format!(
            "number out of range: {}",
            value
        ))),
    }
}
