//! Input kinds for metadata fields

/// How a field is entered, validated and converted to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Password,
    Integer,
    Number,
    /// ISO date, `YYYY-MM-DD`
    Date,
    /// One of a fixed set of string values
    Choice(&'static [&'static str]),
    /// Integer id of another entity, named by its resource key
    Reference(&'static str),
}

impl FieldKind {
    /// `type` attribute of the HTML input rendering this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Choice(_) | Self::Reference(_) => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Password => "password",
            Self::Integer | Self::Number => "number",
            Self::Date => "date",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Date => "date",
            Self::Choice(_) => "choice",
            Self::Reference(_) => "reference",
        }
    }
}
