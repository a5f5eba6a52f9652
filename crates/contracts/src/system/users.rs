use serde::{Deserialize, Serialize};

use crate::domain::common::CrudResource;
use crate::shared::metadata::{FieldKind, FieldMetadata};

pub const USER_ROLES: &[&str] = &["Admin", "Manager", "Staff"];

/// Console operator account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub role: String,
    /// Only sent when set; never returned by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("userName", "User name", FieldKind::Text)
        .required()
        .min_length(3)
        .max_length(50),
    FieldMetadata::new("firstName", "First name", FieldKind::Text).required(),
    FieldMetadata::new("lastName", "Last name", FieldKind::Text).required(),
    FieldMetadata::new("email", "Email", FieldKind::Email).required(),
    FieldMetadata::new("phoneNumber", "Phone number", FieldKind::Phone),
    FieldMetadata::new("role", "Role", FieldKind::Choice(USER_ROLES)).required(),
    FieldMetadata::new("password", "Password", FieldKind::Password)
        .hidden_in_list()
        .min_length(8)
        .placeholder("Leave blank to keep the current password")
        .hint("At least 8 characters."),
];

impl CrudResource for User {
    const KEY: &'static str = "User";
    const BASE: &'static str = "/User";
    const SINGULAR: &'static str = "User";
    const ENTITY_LABEL: &'static str = "User";
    const LIST_LABEL: &'static str = "Users";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.user_name.clone()
    }
}
