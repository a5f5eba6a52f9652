use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const RESIDENT_TYPES: &[&str] = &["Owner", "Tenant", "Family Member"];

/// Person living in (or owning) a flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    #[serde(default, alias = "residentId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub flat_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_number: String,
    pub resident_type: String,
    #[serde(default)]
    pub move_in_date: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("flatId", "Flat", FieldKind::Reference("Flat")).required(),
    FieldMetadata::new("firstName", "First name", FieldKind::Text).required(),
    FieldMetadata::new("lastName", "Last name", FieldKind::Text).required(),
    FieldMetadata::new("email", "Email", FieldKind::Email),
    FieldMetadata::new("phoneNumber", "Phone number", FieldKind::Phone).required(),
    FieldMetadata::new("residentType", "Resident type", FieldKind::Choice(RESIDENT_TYPES))
        .required(),
    FieldMetadata::new("moveInDate", "Move-in date", FieldKind::Date).hidden_in_list(),
];

impl CrudResource for Resident {
    const KEY: &'static str = "Resident";
    const BASE: &'static str = "/Resident";
    const SINGULAR: &'static str = "Resident";
    const ENTITY_LABEL: &'static str = "Resident";
    const LIST_LABEL: &'static str = "Residents";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
