use contracts::domain::a001_society::aggregate::Society;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn SocietyListing() -> impl IntoView {
    crud_list_page::<Society>(ListOptions::subtitle("Registered housing societies."))
}

#[component]
pub fn SocietyForm() -> impl IntoView {
    crud_form_page::<Society>()
}
