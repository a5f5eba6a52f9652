use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const METER_TYPES: &[&str] = &["Electricity", "Water", "Gas"];

/// Utility meter installed in a flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meter {
    #[serde(default, alias = "meterId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub flat_id: i64,
    pub meter_number: String,
    pub meter_type: String,
    #[serde(default)]
    pub installation_date: Option<String>,
    #[serde(default)]
    pub initial_reading: Option<f64>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("flatId", "Flat", FieldKind::Reference("Flat")).required(),
    FieldMetadata::new("meterNumber", "Meter number", FieldKind::Text).required(),
    FieldMetadata::new("meterType", "Meter type", FieldKind::Choice(METER_TYPES)).required(),
    FieldMetadata::new("installationDate", "Installed on", FieldKind::Date),
    FieldMetadata::new("initialReading", "Initial reading", FieldKind::Number).min(0.0),
];

impl CrudResource for Meter {
    const KEY: &'static str = "Meter";
    const BASE: &'static str = "/Meter";
    const SINGULAR: &'static str = "Meter";
    const ENTITY_LABEL: &'static str = "Meter";
    const LIST_LABEL: &'static str = "Meters";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.meter_number, self.meter_type)
    }
}
