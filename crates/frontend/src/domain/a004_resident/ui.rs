use contracts::domain::a004_resident::aggregate::Resident;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn ResidentListing() -> impl IntoView {
    crud_list_page::<Resident>(ListOptions::subtitle("Owners and tenants living in each flat."))
}

#[component]
pub fn ResidentForm() -> impl IntoView {
    crud_form_page::<Resident>()
}
