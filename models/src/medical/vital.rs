// models/src/medical/vital.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

/// A set of vital signs measured together. Every reading is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VitalProperties {
    pub measured_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

impl VitalProperties {
    fn readings(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("bloodPressureSystolic", self.blood_pressure_systolic),
            ("bloodPressureDiastolic", self.blood_pressure_diastolic),
            ("heartRate", self.heart_rate),
            ("temperature", self.temperature),
            ("respiratoryRate", self.respiratory_rate),
            ("oxygenSaturation", self.oxygen_saturation),
            ("weight", self.weight),
            ("height", self.height),
            ("bmi", self.bmi),
        ]
    }
}

impl ToNode for VitalProperties {
    const NODE_TYPE: NodeType = NodeType::Vital;

    fn validate(&self) -> ValidationResult<()> {
        for (field, reading) in self.readings() {
            if let Some(value) = reading {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ValidationError::InvalidMeasurement(field));
                }
            }
        }
        if let Some(spo2) = self.oxygen_saturation {
            if spo2 > 100.0 {
                return Err(ValidationError::OutOfRange {
                    field: "oxygenSaturation",
                    value: spo2,
                    min: 0.0,
                    max: 100.0,
                });
            }
        }
        Ok(())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.measured_date)
    }
}
