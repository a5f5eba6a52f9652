use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const BILLING_CYCLES: &[&str] = &["Monthly", "Quarterly", "Half-Yearly", "Yearly"];

/// Group of flats sharing one maintenance amount and billing cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceGroup {
    #[serde(default, alias = "maintenanceGroupId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub society_id: i64,
    pub group_name: String,
    pub amount: f64,
    pub billing_cycle: String,
    #[serde(default)]
    pub description: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("societyId", "Society", FieldKind::Reference("Society")).required(),
    FieldMetadata::new("groupName", "Group name", FieldKind::Text).required(),
    FieldMetadata::new("amount", "Amount", FieldKind::Number)
        .required()
        .min(0.0),
    FieldMetadata::new("billingCycle", "Billing cycle", FieldKind::Choice(BILLING_CYCLES))
        .required(),
    FieldMetadata::new("description", "Description", FieldKind::Text).hidden_in_list(),
];

impl CrudResource for MaintenanceGroup {
    const KEY: &'static str = "MaintenanceGroup";
    const BASE: &'static str = "/MaintenanceGroup";
    const SINGULAR: &'static str = "MaintenanceGroup";
    const ENTITY_LABEL: &'static str = "Maintenance group";
    const LIST_LABEL: &'static str = "Maintenance groups";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.group_name.clone()
    }
}
