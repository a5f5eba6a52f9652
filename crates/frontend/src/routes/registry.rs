//! Component registry - the single source of truth for mapping the
//! `componentName` of a server menu entry to a screen.
//!
//! Every name the backend may configure must be listed in
//! [`REGISTERED_COMPONENTS`] and handled in [`render_component`]; the test
//! below keeps the two in sync.

use crate::domain::a001_society::ui::{SocietyForm, SocietyListing};
use crate::domain::a002_apartment::ui::{ApartmentForm, ApartmentListing};
use crate::domain::a003_flat::ui::{FlatForm, FlatListing};
use crate::domain::a004_resident::ui::{ResidentForm, ResidentListing};
use crate::domain::a005_meter::ui::{MeterForm, MeterListing};
use crate::domain::a006_unit_charge::ui::{UnitChargeForm, UnitChargeListing};
use crate::domain::a007_maintenance_group::ui::{MaintenanceGroupForm, MaintenanceGroupListing};
use crate::system::users::ui::{UserForm, UserListing};
use leptos::prelude::*;
use thiserror::Error;

pub const REGISTERED_COMPONENTS: &[&str] = &[
    "SocietyListing",
    "SocietyForm",
    "ApartmentListing",
    "ApartmentForm",
    "FlatListing",
    "FlatForm",
    "ResidentListing",
    "ResidentForm",
    "MeterListing",
    "MeterForm",
    "UnitChargeListing",
    "UnitChargeForm",
    "MaintenanceGroupListing",
    "MaintenanceGroupForm",
    "UserListing",
    "UserForm",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no screen is registered under the name '{0}'")]
    UnknownComponent(String),
    #[error("no route matches '{0}'")]
    NotFound(String),
}

pub fn is_registered(name: &str) -> bool {
    REGISTERED_COMPONENTS.contains(&name)
}

/// Render the screen registered under `name`.
pub fn render_component(name: &str) -> Result<AnyView, RouteError> {
    let view = match name {
        // a001: Societies
        "SocietyListing" => view! { <SocietyListing /> }.into_any(),
        "SocietyForm" => view! { <SocietyForm /> }.into_any(),

        // a002: Apartments
        "ApartmentListing" => view! { <ApartmentListing /> }.into_any(),
        "ApartmentForm" => view! { <ApartmentForm /> }.into_any(),

        // a003: Flats
        "FlatListing" => view! { <FlatListing /> }.into_any(),
        "FlatForm" => view! { <FlatForm /> }.into_any(),

        // a004: Residents
        "ResidentListing" => view! { <ResidentListing /> }.into_any(),
        "ResidentForm" => view! { <ResidentForm /> }.into_any(),

        // a005: Meters
        "MeterListing" => view! { <MeterListing /> }.into_any(),
        "MeterForm" => view! { <MeterForm /> }.into_any(),

        // a006: Unit charges
        "UnitChargeListing" => view! { <UnitChargeListing /> }.into_any(),
        "UnitChargeForm" => view! { <UnitChargeForm /> }.into_any(),

        // a007: Maintenance groups
        "MaintenanceGroupListing" => view! { <MaintenanceGroupListing /> }.into_any(),
        "MaintenanceGroupForm" => view! { <MaintenanceGroupForm /> }.into_any(),

        // Системные
        "UserListing" => view! { <UserListing /> }.into_any(),
        "UserForm" => view! { <UserForm /> }.into_any(),

        unknown => {
            log::error!("unregistered component '{}'", unknown);
            return Err(RouteError::UnknownComponent(unknown.to_string()));
        }
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_society::aggregate::Society;
    use contracts::domain::a002_apartment::aggregate::Apartment;
    use contracts::domain::a003_flat::aggregate::Flat;
    use contracts::domain::a004_resident::aggregate::Resident;
    use contracts::domain::a005_meter::aggregate::Meter;
    use contracts::domain::a006_unit_charge::aggregate::UnitCharge;
    use contracts::domain::a007_maintenance_group::aggregate::MaintenanceGroup;
    use contracts::domain::common::CrudResource;
    use contracts::system::users::User;
    use std::collections::HashSet;

    fn screens<T: CrudResource>() -> [String; 2] {
        [T::listing_component(), T::form_component()]
    }

    #[test]
    fn every_resource_has_listing_and_form() {
        let expected: Vec<String> = [
            screens::<Society>(),
            screens::<Apartment>(),
            screens::<Flat>(),
            screens::<Resident>(),
            screens::<Meter>(),
            screens::<UnitCharge>(),
            screens::<MaintenanceGroup>(),
            screens::<User>(),
        ]
        .into_iter()
        .flatten()
        .collect();

        for name in &expected {
            assert!(is_registered(name), "{} is not registered", name);
        }
        assert_eq!(expected.len(), REGISTERED_COMPONENTS.len());
    }

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = REGISTERED_COMPONENTS.iter().collect();
        assert_eq!(unique.len(), REGISTERED_COMPONENTS.len());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(!is_registered("ApartmentListin"));
        assert!(!is_registered(""));
    }
}
