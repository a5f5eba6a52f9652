//! Generic listing screen over a [`CrudResource`].
//!
//! Columns come from the resource's field metadata. Reference columns show
//! the referenced record's name when it can be looked up, the raw id
//! otherwise.

use contracts::domain::common::CrudResource;
use contracts::shared::metadata::{display_value, FieldKind, FieldMetadata};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::reference_options;
use crate::routes::use_route_table;
use crate::shared::api_utils::ApiError;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud;
use crate::shared::icons::icon;
use crate::shared::modal::{Message, MessageDialog};

/// Display names of referenced records, by resource key and id.
pub type ReferenceLabels = HashMap<String, HashMap<i64, String>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub subtitle: Option<&'static str>,
}

impl ListOptions {
    pub fn subtitle(text: &'static str) -> Self {
        Self {
            subtitle: Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: Option<i64>,
    pub name: String,
    pub cells: Vec<String>,
}

pub fn list_columns(fields: &'static [FieldMetadata]) -> Vec<&'static FieldMetadata> {
    fields.iter().filter(|f| f.visible_in_list()).collect()
}

pub fn build_rows<T: CrudResource>(records: &[T], labels: &ReferenceLabels) -> Vec<ListRow> {
    let columns = list_columns(T::fields());
    records
        .iter()
        .map(|record| {
            let value = serde_json::to_value(record).unwrap_or(Value::Null);
            ListRow {
                id: record.id(),
                name: record.display_name(),
                cells: columns
                    .iter()
                    .map(|field| cell_text(field, value.get(field.name), labels))
                    .collect(),
            }
        })
        .collect()
}

fn cell_text(field: &FieldMetadata, value: Option<&Value>, labels: &ReferenceLabels) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if let FieldKind::Reference(resource) = field.kind {
        let label = value
            .as_i64()
            .and_then(|id| labels.get(resource)?.get(&id));
        if let Some(label) = label {
            return label.clone();
        }
    }
    display_value(value)
}

fn referenced_resources(fields: &[FieldMetadata]) -> Vec<&'static str> {
    let mut resources = Vec::new();
    for field in fields.iter().filter(|f| f.visible_in_list()) {
        if let FieldKind::Reference(resource) = field.kind {
            if !resources.contains(&resource) {
                resources.push(resource);
            }
        }
    }
    resources
}

async fn load_rows<T: CrudResource>() -> Result<Vec<ListRow>, ApiError> {
    let records = crud::fetch_all::<T>().await?;
    let mut labels = ReferenceLabels::new();
    for resource in referenced_resources(T::fields()) {
        match reference_options(resource).await {
            Ok(options) => {
                labels.insert(resource.to_string(), options.into_iter().collect());
            }
            Err(e) => log::warn!("showing raw {} ids: {}", resource, e),
        }
    }
    Ok(build_rows(&records, &labels))
}

pub fn crud_list_page<T: CrudResource>(options: ListOptions) -> impl IntoView {
    let route_table = use_route_table();
    let navigate = StoredValue::new(use_navigate());
    let rows = RwSignal::new(Vec::<ListRow>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<Message>);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            let (next, failure) = match load_rows::<T>().await {
                Ok(next) => (next, None),
                Err(e) => {
                    log::error!("failed to load {}: {}", T::LIST_LABEL, e);
                    (Vec::new(), Some(e.user_message()))
                }
            };
            // Страницу могли закрыть, пока запрос был в полёте
            let _ = rows.try_set(next);
            let _ = notice.try_set(failure);
            let _ = loading.try_set(false);
        });
    };

    let open_form = move |id: Option<i64>| {
        let form = T::form_component();
        match route_table.with_untracked(|t| t.path_for_component(&form)) {
            Some(path) => {
                let url = match id {
                    Some(id) => format!("{}?id={}", path, id),
                    None => path,
                };
                navigate.with_value(|nav| nav(&url, Default::default()));
            }
            None => {
                log::warn!("no menu route renders '{}'", form);
                message.set(Some(Message::error(format!(
                    "No {} form is configured in the menu.",
                    T::ENTITY_LABEL
                ))));
            }
        }
    };

    let delete_row = move |row: ListRow| {
        let Some(id) = row.id else {
            return;
        };
        let prompt = format!("Delete {} '{}'?", T::ENTITY_LABEL, row.name);
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(&prompt).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let outcome = match crud::delete::<T>(id).await {
                Ok(()) => Message::success(format!("{} '{}' was deleted.", T::ENTITY_LABEL, row.name)),
                Err(e) => {
                    log::error!("failed to delete {} #{}: {}", T::ENTITY_LABEL, id, e);
                    Message::error(e.user_message())
                }
            };
            if message.try_set(Some(outcome)).is_none() {
                fetch();
            }
        });
    };

    fetch();

    let columns = list_columns(T::fields());
    let column_count = (columns.len() + 1).to_string();
    let headers = columns
        .iter()
        .map(|f| view! { <th class="table__header-cell">{f.label()}</th> })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader title=T::LIST_LABEL subtitle=options.subtitle.map(str::to_string)>
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    {format!("Add {}", T::ENTITY_LABEL)}
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    "Refresh"
                </button>
            </PageHeader>

            {move || notice.get().map(|text| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {headers}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let span = column_count.clone();
                            if loading.get() {
                                view! { <tr><td class="table__cell table__cell--empty" colspan=span>"Loading..."</td></tr> }.into_any()
                            } else if rows.with(Vec::is_empty) {
                                view! { <tr><td class="table__cell table__cell--empty" colspan=span>"No records yet."</td></tr> }.into_any()
                            } else {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let edit_id = row.id;
                                        let cells = row.cells.clone();
                                        view! {
                                            <tr class="table__row">
                                                {cells.into_iter().map(|c| view! { <td class="table__cell">{c}</td> }).collect_view()}
                                                <td class="table__cell table__cell--actions">
                                                    <button class="button button--ghost" on:click=move |_| open_form(edit_id)>
                                                        {icon("edit")}
                                                        "Edit"
                                                    </button>
                                                    <button class="button button--ghost" on:click=move |_| delete_row(row.clone())>
                                                        {icon("trash")}
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <MessageDialog message=message />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_society::aggregate::Society;
    use contracts::domain::a002_apartment::aggregate::Apartment;

    fn apartment(id: i64, society_id: i64, name: &str) -> Apartment {
        Apartment {
            id: Some(id),
            society_id,
            name: name.to_string(),
            number_of_floors: 12,
            description: Some("hidden in the list".to_string()),
        }
    }

    #[test]
    fn hidden_fields_are_not_columns() {
        let labels: Vec<_> = list_columns(Apartment::fields())
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(labels, vec!["societyId", "name", "numberOfFloors"]);
    }

    #[test]
    fn reference_cells_use_known_names() {
        let mut labels = ReferenceLabels::new();
        labels.insert(
            Society::KEY.to_string(),
            HashMap::from([(1, "Green Meadows".to_string())]),
        );
        let rows = build_rows(&[apartment(5, 1, "Tower A"), apartment(6, 9, "Tower B")], &labels);

        assert_eq!(rows[0].id, Some(5));
        assert_eq!(rows[0].name, "Tower A");
        assert_eq!(rows[0].cells, vec!["Green Meadows", "Tower A", "12"]);
        // Unknown society: raw id.
        assert_eq!(rows[1].cells[0], "9");
    }

    #[test]
    fn referenced_resources_are_deduplicated() {
        assert_eq!(referenced_resources(Apartment::fields()), vec!["Society"]);
        assert!(referenced_resources(Society::fields()).is_empty());
    }
}
