use contracts::domain::a005_meter::aggregate::Meter;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn MeterListing() -> impl IntoView {
    crud_list_page::<Meter>(ListOptions::subtitle("Utility meters installed in flats."))
}

#[component]
pub fn MeterForm() -> impl IntoView {
    crud_form_page::<Meter>()
}
