use contracts::domain::a003_flat::aggregate::Flat;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn FlatListing() -> impl IntoView {
    crud_list_page::<Flat>(ListOptions::subtitle("Individual units, by apartment and floor."))
}

#[component]
pub fn FlatForm() -> impl IntoView {
    crud_form_page::<Flat>()
}
