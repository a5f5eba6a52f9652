//! Generic create/edit screen over a [`CrudResource`].
//!
//! The record id comes from the `?id=` query parameter; without it the form
//! creates a new record. Values are kept as one string per field and only
//! converted to the record type on save.

use contracts::domain::common::CrudResource;
use contracts::shared::metadata::{
    form_text, form_to_record, record_to_form, set_form_text, FieldError, FieldKind, FieldMetadata,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::reference_options;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud;
use crate::shared::icons::icon;
use crate::shared::modal::{Message, MessageDialog};
use crate::shared::navigation_guard::{use_navigation_intents, NavigationGuard};
use crate::shared::state::form_snapshot::{CompareRules, FormSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Invalid(Vec<FieldError>),
    /// Validated values that still do not fit the record type.
    Shape(String),
}

/// Validate `form` and build the record to send, carrying `id` for updates.
pub fn prepare_record<T: CrudResource>(form: &Value, id: Option<i64>) -> Result<T, SubmitError> {
    let mut body = form_to_record(form, T::fields()).map_err(SubmitError::Invalid)?;
    if let (Some(id), Value::Object(map)) = (id, &mut body) {
        map.insert("id".to_string(), Value::from(id));
    }
    serde_json::from_value(body).map_err(|e| SubmitError::Shape(e.to_string()))
}

/// Form state of a new record: every visible field blank.
pub fn blank_form(fields: &[FieldMetadata]) -> Value {
    record_to_form(&Value::Null, fields)
}

pub fn parse_record_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}

pub fn crud_form_page<T: CrudResource>() -> impl IntoView {
    let fields = T::fields();
    let intents = use_navigation_intents();
    let record_id = parse_record_id(use_query_map().with_untracked(|q| q.get("id")));

    let blank = blank_form(fields);
    let values = RwSignal::new(blank.clone());
    let snapshot = RwSignal::new(FormSnapshot::new(blank, CompareRules::trimmed()));
    let dirty = Memo::new(move |_| values.with(|v| snapshot.with(|s| s.is_dirty(v))));

    let errors = RwSignal::new(HashMap::<&'static str, String>::new());
    let references = RwSignal::new(HashMap::<&'static str, Vec<(i64, String)>>::new());
    let loading = RwSignal::new(record_id.is_some());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let message = RwSignal::new(None::<Message>);

    if let Some(id) = record_id {
        spawn_local(async move {
            match crud::fetch_by_id::<T>(id).await {
                Ok(record) => {
                    let loaded = serde_json::to_value(&record).unwrap_or(Value::Null);
                    let form = record_to_form(&loaded, fields);
                    let _ = snapshot.try_update(|s| s.commit(&form));
                    let _ = values.try_set(form);
                }
                Err(e) => {
                    log::error!("failed to load {} #{}: {}", T::ENTITY_LABEL, id, e);
                    let _ = load_error.try_set(Some(e.user_message()));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    for field in fields.iter().filter(|f| f.visible_in_form()) {
        if let FieldKind::Reference(resource) = field.kind {
            let name = field.name;
            spawn_local(async move {
                match reference_options(resource).await {
                    Ok(options) => {
                        let _ = references.try_update(|r| r.insert(name, options));
                    }
                    Err(e) => log::warn!("no options for '{}': {}", name, e),
                }
            });
        }
    }

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let form = values.get_untracked();
        let record = match prepare_record::<T>(&form, record_id) {
            Ok(record) => record,
            Err(SubmitError::Invalid(field_errors)) => {
                errors.set(field_errors.into_iter().map(|e| (e.field, e.message)).collect());
                return;
            }
            Err(SubmitError::Shape(detail)) => {
                log::error!("{} form produced an unusable record: {}", T::ENTITY_LABEL, detail);
                message.set(Some(Message::error("The form could not be converted for saving.")));
                return;
            }
        };
        errors.set(HashMap::new());
        saving.set(true);

        spawn_local(async move {
            let outcome = match crud::save(&record).await {
                Ok(()) => {
                    // У созданной записи здесь нет id, начинаем с пустой формы
                    let clean = if record_id.is_some() { form } else { blank_form(fields) };
                    let _ = snapshot.try_update(|s| s.commit(&clean));
                    let _ = values.try_set(clean);
                    Message::success(format!("{} saved.", T::ENTITY_LABEL))
                }
                Err(e) => {
                    log::error!("failed to save {}: {}", T::ENTITY_LABEL, e);
                    Message::error(e.user_message())
                }
            };
            let _ = saving.try_set(false);
            let _ = message.try_set(Some(outcome));
        });
    };

    let title = if record_id.is_some() {
        format!("Edit {}", T::ENTITY_LABEL)
    } else {
        format!("New {}", T::ENTITY_LABEL)
    };

    let field_views = fields
        .iter()
        .filter(|f| f.visible_in_form())
        .map(|field| {
            view! {
                <FormField
                    field=*field
                    values=values
                    errors=errors
                    references=references
                    disabled=Signal::derive(move || loading.get())
                />
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <NavigationGuard has_unsaved_changes=dirty />
            <PageHeader title=title>
                <button class="button button--secondary" on:click=move |_| intents.go_back_unguarded()>
                    {icon("arrow-left")}
                    "Back"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || loading.get()
                    on:click=move |_| submit()
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </PageHeader>

            {move || load_error.get().map(|text| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                </div>
            })}

            <form
                class="details-form"
                class:details-form--loading=move || loading.get()
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {field_views}
            </form>

            <MessageDialog message=message />
        </div>
    }
}

#[component]
fn FormField(
    field: FieldMetadata,
    values: RwSignal<Value>,
    errors: RwSignal<HashMap<&'static str, String>>,
    references: RwSignal<HashMap<&'static str, Vec<(i64, String)>>>,
    /// Set while the record is loading, so typing cannot be overwritten.
    disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name;
    let text = move || values.with(|v| form_text(v, name));
    let on_edit = move |raw: String| {
        values.update(|v| set_form_text(v, name, raw));
        errors.update(|e| {
            e.remove(name);
        });
    };

    let input = match field.kind {
        FieldKind::Choice(choices) => view! {
            <select id=name disabled=move || disabled.get() prop:value=text on:change=move |ev| on_edit(event_target_value(&ev))>
                <option value="">"Select..."</option>
                {choices.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Reference(_) => view! {
            <select id=name disabled=move || disabled.get() prop:value=text on:change=move |ev| on_edit(event_target_value(&ev))>
                <option value="">"Select..."</option>
                {move || {
                    references
                        .with(|r| r.get(name).cloned().unwrap_or_default())
                        .into_iter()
                        .map(|(id, label)| {
                            view! { <option value=id.to_string()>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=name
                type=kind.input_type()
                disabled=move || disabled.get()
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=text
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--invalid=move || errors.with(|e| e.contains_key(name))>
            <label for=name>
                {field.label()}
                {field.validation.is_required().then_some(view! { <span class="form-group__required">" *"</span> })}
            </label>
            {input}
            {field.ui.hint.map(|hint| view! { <div class="form-group__hint">{hint}</div> })}
            {move || errors.with(|e| e.get(name).cloned()).map(|text| view! {
                <div class="form-group__error">{text}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_apartment::aggregate::Apartment;
    use serde_json::json;

    #[test]
    fn fields_are_locked_while_the_record_loads() {
        let render = |loading: bool| {
            Owner::new_root(None).with(|| {
                let field = Apartment::fields()[1];
                view! {
                    <FormField
                        field=field
                        values=RwSignal::new(blank_form(Apartment::fields()))
                        errors=RwSignal::new(HashMap::new())
                        references=RwSignal::new(HashMap::new())
                        disabled=Signal::derive(move || loading)
                    />
                }
                .to_html()
            })
        };
        assert!(render(true).contains("disabled"));
        assert!(!render(false).contains("disabled"));
    }

    #[test]
    fn record_id_must_be_a_positive_integer() {
        assert_eq!(parse_record_id(Some(" 42 ".into())), Some(42));
        assert_eq!(parse_record_id(Some("0".into())), None);
        assert_eq!(parse_record_id(Some("abc".into())), None);
        assert_eq!(parse_record_id(None), None);
    }

    #[test]
    fn blank_form_has_every_visible_field() {
        let form = blank_form(Apartment::fields());
        assert_eq!(
            form,
            json!({ "societyId": "", "name": "", "numberOfFloors": "", "description": "" })
        );
    }

    #[test]
    fn prepare_record_carries_the_id() {
        let form = json!({
            "societyId": "3",
            "name": " Tower C ",
            "numberOfFloors": "9",
            "description": ""
        });
        let record: Apartment = prepare_record(&form, Some(7)).expect("valid form");
        assert_eq!(record.id, Some(7));
        assert_eq!(record.society_id, 3);
        assert_eq!(record.name, "Tower C");
        assert_eq!(record.number_of_floors, 9);
        assert_eq!(record.description, None);
    }

    #[test]
    fn prepare_record_reports_every_invalid_field() {
        let form = json!({ "societyId": "", "name": "", "numberOfFloors": "0", "description": "" });
        match prepare_record::<Apartment>(&form, None) {
            Err(SubmitError::Invalid(errors)) => {
                let names: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(names, vec!["societyId", "name", "numberOfFloors"]);
            }
            other => panic!("expected field errors, got {:?}", other),
        }
    }
}
