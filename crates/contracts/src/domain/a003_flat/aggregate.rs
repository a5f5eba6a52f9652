use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const FLAT_TYPES: &[&str] = &["1BHK", "2BHK", "3BHK", "4BHK", "Studio", "Penthouse"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    #[serde(default, alias = "flatId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub apartment_id: i64,
    pub flat_number: String,
    pub floor_number: i64,
    #[serde(default)]
    pub carpet_area: Option<f64>,
    #[serde(default)]
    pub flat_type: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("apartmentId", "Apartment", FieldKind::Reference("Apartment")).required(),
    FieldMetadata::new("flatNumber", "Flat number", FieldKind::Text)
        .required()
        .max_length(20),
    FieldMetadata::new("floorNumber", "Floor", FieldKind::Integer)
        .required()
        .min(0.0),
    FieldMetadata::new("carpetArea", "Carpet area (sq ft)", FieldKind::Number).min(0.0),
    FieldMetadata::new("flatType", "Flat type", FieldKind::Choice(FLAT_TYPES)),
];

impl CrudResource for Flat {
    const KEY: &'static str = "Flat";
    const BASE: &'static str = "/Flat";
    const SINGULAR: &'static str = "Flat";
    const ENTITY_LABEL: &'static str = "Flat";
    const LIST_LABEL: &'static str = "Flats";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.flat_number.clone()
    }
}
