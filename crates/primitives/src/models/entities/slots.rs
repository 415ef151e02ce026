use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Booked times of one doctor, keyed by slot date (`D_M_YYYY`).
///
/// Within a date the times keep booking order and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotsBooked(BTreeMap<String, Vec<String>>);

impl SlotsBooked {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `slots_booked` column; a SQL/JSON `null` is an empty map.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        if value.is_null() {
            return Ok(Self::default());
        }

        serde_json::from_value(value.clone()).map_err(|e| {
            ApiError::Internal(format!("Corrupt slots_booked document: {}", e))
        })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(&self.0).unwrap_or_else(|_| Value::Object(Default::default()))
    }

    pub fn is_booked(&self, date: &str, time: &str) -> bool {
        self.0
            .get(date)
            .map(|times| times.iter().any(|t| t == time))
            .unwrap_or(false)
    }

    pub fn try_book(&mut self, date: &str, time: &str) -> Result<(), ApiError> {
        let times = self.0.entry(date.to_string()).or_default();

        if times.iter().any(|t| t == time) {
            return Err(ApiError::Conflict("Slot not available".into()));
        }

        times.push(time.to_string());
        Ok(())
    }

    /// Returns whether the time was booked before the call.
    pub fn release(&mut self, date: &str, time: &str) -> bool {
        match self.0.get_mut(date) {
            Some(times) => {
                let before = times.len();
                times.retain(|t| t != time);
                before != times.len()
            }
            None => false,
        }
    }

    pub fn times(&self, date: &str) -> &[String] {
        self.0.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}
