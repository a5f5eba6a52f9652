//! Field metadata for entities edited through the generic listing/form screens.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{FieldMetadata, FieldKind};
//!
//! const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::new("name", "Name", FieldKind::Text).required(),
//!     FieldMetadata::new("contactEmail", "Contact email", FieldKind::Email),
//! ];
//! ```

mod field_type;
mod form;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use form::{display_value, form_text, form_to_record, record_to_form, set_form_text, FieldError};
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
