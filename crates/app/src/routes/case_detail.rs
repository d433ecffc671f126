use dioxus::prelude::*;
use shared_types::{AppErrorKind, CaseDetail as CaseRecord, CaseDocument, TimelineEntry};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    FormMessage, PageHeader, SkeletonList,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// One case with its parties, documents and history.
#[component]
pub fn CaseDetail(id: String) -> Element {
    let api = use_api();
    let mut auth = use_auth();

    let case = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        async move {
            let result = api.get_case(&id).await;
            auth.observe(&result);
            result
        }
    });

    let back = rsx! {
        Link { to: Route::Cases {},
            Button { variant: ButtonVariant::Outline, "Back to cases" }
        }
    };

    match &*case.read() {
        Some(Ok(record)) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("/assets/listing.css") }
            document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
            PageHeader { title: record.summary.title.clone(), subtitle: record.summary.category.clone().unwrap_or_default(), actions: back }
            CaseBody { record: record.clone() }
        },
        Some(Err(err)) if err.kind == AppErrorKind::NotFound => rsx! {
            div { class: "empty-state",
                p { "This case does not exist or is no longer available." }
                Link { to: Route::Cases {}, "Back to cases" }
            }
        },
        Some(Err(err)) => rsx! {
            PageHeader { title: "Case", actions: back }
            FormMessage { message: err.message.clone() }
        },
        None => rsx! {
            Card { CardContent { SkeletonList { rows: 5 } } }
        },
    }
}

#[component]
fn CaseBody(record: CaseRecord) -> Element {
    let summary = &record.summary;
    let opened = summary.created_at.as_deref().map(format_date_human).unwrap_or_else(|| "-".into());
    let updated = summary.updated_at.as_deref().map(format_date_human).unwrap_or_else(|| "-".into());

    rsx! {
        div { class: "dashboard-grid",
            Card {
                CardHeader {
                    CardTitle { "Overview" }
                }
                CardContent {
                    dl { class: "detail-meta",
                        dt { "Status" }
                        dd {
                            Badge { variant: BadgeVariant::for_case_status(summary.status), "{summary.status.label()}" }
                        }
                        dt { "Client" }
                        dd { {summary.client_name.clone().unwrap_or_else(|| "-".into())} }
                        dt { "Lawyer" }
                        dd { {summary.lawyer_name.clone().unwrap_or_else(|| "Unassigned".into())} }
                        dt { "Opened" }
                        dd { "{opened}" }
                        dt { "Last updated" }
                        dd { "{updated}" }
                    }
                    if !summary.description.is_empty() {
                        p { class: "case-description", "{summary.description}" }
                    }
                }
            }
            Documents { documents: record.documents.clone() }
            Timeline { entries: record.timeline.clone() }
        }
    }
}

#[component]
fn Documents(documents: Vec<CaseDocument>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Documents" }
            }
            CardContent {
                if documents.is_empty() {
                    p { class: "empty-state", "No documents uploaded." }
                } else {
                    ul { class: "dashboard-list",
                        for doc in documents {
                            li { key: "{doc.name}", class: "dashboard-list-item",
                                div { class: "dashboard-list-main",
                                    if let Some(url) = doc.url.as_ref() {
                                        a { href: "{url}", target: "_blank", rel: "noopener", "{doc.name}" }
                                    } else {
                                        span { class: "dashboard-list-title", "{doc.name}" }
                                    }
                                    if let Some(at) = doc.uploaded_at.as_deref() {
                                        span { class: "dashboard-list-meta", "Uploaded {format_date_human(at)}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Timeline(entries: Vec<TimelineEntry>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Timeline" }
            }
            CardContent {
                if entries.is_empty() {
                    p { class: "empty-state", "No activity recorded." }
                } else {
                    ol { class: "timeline",
                        for (i, entry) in entries.into_iter().enumerate() {
                            li { key: "{i}",
                                span { class: "timeline-date", "{format_date_human(&entry.date)}" }
                                "{entry.event}"
                            }
                        }
                    }
                }
            }
        }
    }
}
