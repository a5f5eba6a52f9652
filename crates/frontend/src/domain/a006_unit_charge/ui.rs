use contracts::domain::a006_unit_charge::aggregate::UnitCharge;
use leptos::prelude::*;

use crate::shared::components::crud_form::crud_form_page;
use crate::shared::components::crud_list::{crud_list_page, ListOptions};

#[component]
pub fn UnitChargeListing() -> impl IntoView {
    crud_list_page::<UnitCharge>(ListOptions::subtitle("Per-unit rates used for metered billing."))
}

#[component]
pub fn UnitChargeForm() -> impl IntoView {
    crud_form_page::<UnitCharge>()
}
