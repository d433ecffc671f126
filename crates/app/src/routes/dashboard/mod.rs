pub mod admin;
pub mod client;
pub mod lawyer;

use dioxus::prelude::*;
use shared_types::{AppError, Appointment, CaseSummary, Role};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, FormMessage, SkeletonList};

use crate::auth::use_auth;
use crate::format_helpers::{format_date_human, format_datetime_human};
use crate::routes::Route;

/// Picks the dashboard for the signed-in role.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    match auth.role() {
        Role::Client => rsx! { client::ClientDashboard {} },
        Role::Lawyer => rsx! { lawyer::LawyerDashboard {} },
        Role::Admin => rsx! { admin::AdminDashboard {} },
    }
}

/// Placeholder grid while the first read is in flight.
#[component]
fn DashboardLoading() -> Element {
    rsx! {
        div { class: "dashboard-grid",
            Card { CardContent { SkeletonList { rows: 4 } } }
            Card { CardContent { SkeletonList { rows: 4 } } }
        }
    }
}

#[component]
fn DashboardError(error: AppError) -> Element {
    rsx! {
        FormMessage { message: error.message }
    }
}

/// The most recent cases, linking to their detail pages.
#[component]
fn RecentCases(title: String, cases: Vec<CaseSummary>, #[props(default = 5)] limit: usize) -> Element {
    let nav = use_navigator();

    rsx! {
        Card {
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                if cases.is_empty() {
                    p { class: "empty-state", "No cases yet." }
                } else {
                    ul { class: "dashboard-list",
                        for case in cases.into_iter().take(limit) {
                            {
                                let id = case.id.clone();
                                let opened = case.created_at.as_deref().map(format_date_human).unwrap_or_default();
                                rsx! {
                                    li {
                                        key: "{case.id}",
                                        class: "dashboard-list-item clickable",
                                        onclick: move |_| { nav.push(Route::CaseDetail { id: id.clone() }); },
                                        div { class: "dashboard-list-main",
                                            span { class: "dashboard-list-title", "{case.title}" }
                                            span { class: "dashboard-list-meta", "{opened}" }
                                        }
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
}

#[component]
fn UpcomingAppointments(appointments: Vec<Appointment>) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "Upcoming Appointments" } }
            CardContent {
                if appointments.is_empty() {
                    p { class: "empty-state", "Nothing scheduled." }
                } else {
                    ul { class: "dashboard-list",
                        for appt in appointments {
                            li { key: "{appt.id}", class: "dashboard-list-item",
                                div { class: "dashboard-list-main",
                                    span { class: "dashboard-list-title", "{appt.title}" }
                                    span { class: "dashboard-list-meta",
                                        "{format_datetime_human(&appt.scheduled_at)}"
                                        if let Some(with) = appt.with_name.as_ref() {
                                            " with {with}"
                                        }
                                    }
                                }
                                if let Some(place) = appt.location.as_ref() {
                                    span { class: "dashboard-list-meta", "{place}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
