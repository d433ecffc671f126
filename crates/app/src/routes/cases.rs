use dioxus::prelude::*;
use shared_types::{CaseFilter, CaseStatus, CaseSummary};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, FormMessage, FormSelect, Input, PageHeader, SkeletonList};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_date_human;
use crate::routes::Route;

const STATUS_OPTIONS: [CaseStatus; 3] = [CaseStatus::Open, CaseStatus::InProgress, CaseStatus::Closed];

/// Case list for the signed-in user, filtered client-side by status and text.
#[component]
pub fn Cases() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut status = use_signal(|| Option::<CaseStatus>::None);
    let mut search = use_signal(String::new);

    let cases = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.list_cases().await;
            auth.observe(&result);
            result
        }
    });

    let nav = use_navigator();
    let filter = CaseFilter { status: status(), search: search() };
    let status_value = status().map(|s| s.label().to_string()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/listing.css") }
        PageHeader { title: "Cases", subtitle: "Every case you are part of" }

        div { class: "filter-bar",
            Input {
                name: "case-search",
                label: "Search",
                placeholder: "Title, description or category",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
            FormSelect {
                name: "case-status",
                label: "Status",
                value: status_value,
                onchange: move |e: FormEvent| status.set(CaseStatus::from_str_opt(&e.value())),
                option { value: "", "All statuses" }
                for s in STATUS_OPTIONS {
                    option { key: "{s.label()}", value: s.label(), selected: status() == Some(s), "{s.label()}" }
                }
            }
        }

        match &*cases.read() {
            Some(Ok(all)) => rsx! {
                CaseTable {
                    cases: filter.apply(all).into_iter().cloned().collect::<Vec<_>>(),
                    total: all.len(),
                    on_open: move |id: String| { nav.push(Route::CaseDetail { id }); },
                }
            },
            Some(Err(err)) => rsx! { FormMessage { message: err.message.clone() } },
            None => rsx! { Card { CardContent { SkeletonList { rows: 6 } } } },
        }
    }
}

#[component]
fn CaseTable(cases: Vec<CaseSummary>, total: usize, #[props(default)] on_open: EventHandler<String>) -> Element {
    if total == 0 {
        return rsx! { p { class: "empty-state", "No cases yet." } };
    }
    if cases.is_empty() {
        return rsx! { p { class: "empty-state", "No cases match these filters." } };
    }

    rsx! {
        p { class: "listing-count", "Showing {cases.len()} of {total}" }
        table { class: "listing-table",
            thead {
                tr {
                    th { "Title" }
                    th { "Category" }
                    th { "Client" }
                    th { "Lawyer" }
                    th { "Opened" }
                    th { "Status" }
                }
            }
            tbody {
                for case in cases {
                    {
                        let id = case.id.clone();
                        rsx! {
                            tr {
                                key: "{case.id}",
                                class: "clickable",
                                onclick: move |_| on_open.call(id.clone()),
                                td { "{case.title}" }
                                td { {case.category.clone().unwrap_or_else(|| "-".into())} }
                                td { {case.client_name.clone().unwrap_or_else(|| "-".into())} }
                                td { {case.lawyer_name.clone().unwrap_or_else(|| "Unassigned".into())} }
                                td { {case.created_at.as_deref().map(format_date_human).unwrap_or_default()} }
                                td {
                                    Badge { variant: BadgeVariant::for_case_status(case.status), "{case.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
