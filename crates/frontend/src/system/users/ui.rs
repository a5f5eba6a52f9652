use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn UserListing() -> impl IntoView {
    crud_list_page::<User>(ListOptions::subtitle("Accounts that can sign in to the console."))
}

/// Leaving the password blank keeps the current one.
#[component]
pub fn UserForm() -> impl IntoView {
    crud_form_page::<User>()
}
