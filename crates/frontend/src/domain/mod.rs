//! Entity screens. Each module registers a `{Entity}Listing` and an
//! `{Entity}Form` built from the generic CRUD pages.

pub mod a001_society;
pub mod a002_apartment;
pub mod a003_flat;
pub mod a004_resident;
pub mod a005_meter;
pub mod a006_unit_charge;
pub mod a007_maintenance_group;

use contracts::domain::a001_society::aggregate::Society;
use contracts::domain::a002_apartment::aggregate::Apartment;
use contracts::domain::a003_flat::aggregate::Flat;
use contracts::domain::a004_resident::aggregate::Resident;
use contracts::domain::a005_meter::aggregate::Meter;
use contracts::domain::a006_unit_charge::aggregate::UnitCharge;
use contracts::domain::a007_maintenance_group::aggregate::MaintenanceGroup;
use contracts::domain::common::CrudResource;
use contracts::system::users::User;

use crate::shared::api_utils::ApiError;
use crate::shared::crud;

/// `(id, display name)` pairs of every record of `T`.
pub async fn options_of<T: CrudResource>() -> Result<Vec<(i64, String)>, ApiError> {
    let records = crud::fetch_all::<T>().await?;
    Ok(records
        .into_iter()
        .filter_map(|r| Some((r.id()?, r.display_name())))
        .collect())
}

/// Resources a reference field can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSource {
    Society,
    Apartment,
    Flat,
    Resident,
    Meter,
    UnitCharge,
    MaintenanceGroup,
    User,
}

pub fn reference_source(resource: &str) -> Option<ReferenceSource> {
    let source = match resource {
        "Society" => ReferenceSource::Society,
        "Apartment" => ReferenceSource::Apartment,
        "Flat" => ReferenceSource::Flat,
        "Resident" => ReferenceSource::Resident,
        "Meter" => ReferenceSource::Meter,
        "UnitCharge" => ReferenceSource::UnitCharge,
        "MaintenanceGroup" => ReferenceSource::MaintenanceGroup,
        "User" => ReferenceSource::User,
        _ => return None,
    };
    Some(source)
}

/// Picker options for a reference field, by the referenced resource key.
pub async fn reference_options(resource: &str) -> Result<Vec<(i64, String)>, ApiError> {
    let Some(source) = reference_source(resource) else {
        log::warn!("no reference source for '{}'", resource);
        return Ok(Vec::new());
    };
    match source {
        ReferenceSource::Society => options_of::<Society>().await,
        ReferenceSource::Apartment => options_of::<Apartment>().await,
        ReferenceSource::Flat => options_of::<Flat>().await,
        ReferenceSource::Resident => options_of::<Resident>().await,
        ReferenceSource::Meter => options_of::<Meter>().await,
        ReferenceSource::UnitCharge => options_of::<UnitCharge>().await,
        ReferenceSource::MaintenanceGroup => options_of::<MaintenanceGroup>().await,
        ReferenceSource::User => options_of::<User>().await,
    }
}
