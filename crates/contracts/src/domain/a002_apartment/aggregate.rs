use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

/// Building (tower or wing) inside a society.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    #[serde(default, alias = "apartmentId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub society_id: i64,
    pub name: String,
    pub number_of_floors: i64,
    #[serde(default)]
    pub description: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("societyId", "Society", FieldKind::Reference("Society")).required(),
    FieldMetadata::new("name", "Apartment name", FieldKind::Text)
        .required()
        .placeholder("Tower A"),
    FieldMetadata::new("numberOfFloors", "Number of floors", FieldKind::Integer)
        .required()
        .min(1.0),
    FieldMetadata::new("description", "Description", FieldKind::Text).hidden_in_list(),
];

impl CrudResource for Apartment {
    const KEY: &'static str = "Apartment";
    const BASE: &'static str = "/Apartment";
    const SINGULAR: &'static str = "Apartment";
    const ENTITY_LABEL: &'static str = "Apartment";
    const LIST_LABEL: &'static str = "Apartments";

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
