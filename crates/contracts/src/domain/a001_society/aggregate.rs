use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

// ============================================================================
// Aggregate
// ============================================================================

/// Housing society: the top-level owner of apartments, charges and groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    #[serde(default, alias = "societyId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub registration_number: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

// ============================================================================
// Metadata
// ============================================================================

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Society name", FieldKind::Text)
        .required()
        .max_length(150),
    FieldMetadata::new("registrationNumber", "Registration number", FieldKind::Text).required(),
    FieldMetadata::new("address", "Address", FieldKind::Text)
        .required()
        .hidden_in_list(),
    FieldMetadata::new("city", "City", FieldKind::Text).required(),
    FieldMetadata::new("pincode", "Pincode", FieldKind::Text)
        .required()
        .max_length(10),
    FieldMetadata::new("contactEmail", "Contact email", FieldKind::Email),
    FieldMetadata::new("contactPhone", "Contact phone", FieldKind::Phone),
];

impl CrudResource for Society {
    const KEY: &'static str = "Society";
    const BASE: &'static str = "/Society";
    const SINGULAR: &'static str = "Society";
    const ENTITY_LABEL: &'static str = "Society";
    const LIST_LABEL: &'static str = "Societies";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
