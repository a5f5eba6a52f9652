use crate::shared::metadata::FieldMetadata;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity exposed by the backend through the uniform CRUD surface:
///
/// ```text
/// GET    {BASE}/Get-All-{SINGULAR}
/// GET    {BASE}/Get-{SINGULAR}-By-Id/{id}
/// POST   {BASE}/Add-{SINGULAR}
/// PUT    {BASE}/Update-{SINGULAR}/{id}
/// DELETE {BASE}/Delete-{SINGULAR}/{id}?deletedBy={user}
/// ```
pub trait CrudResource:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    /// Resource key, also the prefix of its registered screens
    /// (`{KEY}Listing`, `{KEY}Form`).
    const KEY: &'static str;
    const BASE: &'static str;
    const SINGULAR: &'static str;
    const ENTITY_LABEL: &'static str;
    const LIST_LABEL: &'static str;

    fn id(&self) -> Option<i64>;

    fn fields() -> &'static [FieldMetadata];

    /// Short human-readable name, used in pickers and confirmations.
    fn display_name(&self) -> String;

    fn listing_component() -> String {
        format!("{}Listing", Self::KEY)
    }

    fn form_component() -> String {
        format!("{}Form", Self::KEY)
    }
}
