use contracts::domain::a002_apartment::aggregate::Apartment;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn ApartmentListing() -> impl IntoView {
    crud_list_page::<Apartment>(ListOptions::subtitle("Towers and wings of each society."))
}

#[component]
pub fn ApartmentForm() -> impl IntoView {
    crud_form_page::<Apartment>()
}
