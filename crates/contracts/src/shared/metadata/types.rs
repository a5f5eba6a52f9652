//! Core metadata types for entity fields
//!
//! All types use 'static lifetimes so field tables can live in `const` items.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

/// Metadata for a single field of an entity DTO.
/// `name` is the JSON (camelCase) key of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            ui: FieldUiMetadata::labelled(label),
            validation: ValidationRules::none(),
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.validation.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hint(mut self, hint: &'static str) -> Self {
        self.ui.hint = Some(hint);
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    pub fn label(&self) -> &'static str {
        self.ui.label
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labelled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            hint: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labelled("")
    }
}
