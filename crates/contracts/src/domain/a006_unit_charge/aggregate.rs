use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const UNIT_TYPES: &[&str] = &["kWh", "Litre", "Cubic Metre", "Sq Ft", "Flat"];

/// Per-unit tariff a society bills for a metered or area-based charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCharge {
    #[serde(default, alias = "unitChargeId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub society_id: i64,
    pub charge_name: String,
    pub rate_per_unit: f64,
    pub unit_type: String,
    #[serde(default)]
    pub effective_from: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("societyId", "Society", FieldKind::Reference("Society")).required(),
    FieldMetadata::new("chargeName", "Charge name", FieldKind::Text).required(),
    FieldMetadata::new("ratePerUnit", "Rate per unit", FieldKind::Number)
        .required()
        .min(0.0),
    FieldMetadata::new("unitType", "Unit", FieldKind::Choice(UNIT_TYPES)).required(),
    FieldMetadata::new("effectiveFrom", "Effective from", FieldKind::Date),
];

impl CrudResource for UnitCharge {
    const KEY: &'static str = "UnitCharge";
    const BASE: &'static str = "/UnitCharge";
    const SINGULAR: &'static str = "UnitCharge";
    const ENTITY_LABEL: &'static str = "Unit charge";
    const LIST_LABEL: &'static str = "Unit charges";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.charge_name.clone()
    }
}
