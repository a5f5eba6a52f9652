use contracts::domain::a007_maintenance_group::aggregate::MaintenanceGroup;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn MaintenanceGroupListing() -> impl IntoView {
    crud_list_page::<MaintenanceGroup>(ListOptions::subtitle("Recurring maintenance charges and their billing cycle."))
}

#[component]
pub fn MaintenanceGroupForm() -> impl IntoView {
    crud_form_page::<MaintenanceGroup>()
}
