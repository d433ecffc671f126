use api_client::load_lawyer_dashboard;
use dioxus::prelude::*;
use shared_types::Bid;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, StatGrid};

use super::{DashboardError, DashboardLoading, RecentCases, UpcomingAppointments};
use crate::auth::{use_api, use_auth};
use crate::format_helpers::{format_currency, format_date_human};

fn bid_variant(status: &str) -> BadgeVariant {
    match status.trim().to_lowercase().as_str() {
        "accepted" => BadgeVariant::Success,
        "rejected" | "declined" => BadgeVariant::Destructive,
        "pending" => BadgeVariant::Warning,
        _ => BadgeVariant::Secondary,
    }
}

/// Lawyer home: stat tiles, assigned cases, open bids and appointments.
#[component]
pub fn LawyerDashboard() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let name = auth.identity().name;

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let result = load_lawyer_dashboard(&api).await;
            auth.observe(&result);
            result
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
        PageHeader { title: "Welcome, {name}", subtitle: "Your practice at a glance" }

        match &*data.read() {
            Some(Ok(d)) => rsx! {
                StatGrid { tiles: d.stats.tiles() }
                div { class: "dashboard-grid",
                    RecentCases { title: "Assigned Cases", cases: d.cases.clone() }
                    BidsSection { bids: d.bids.clone() }
                    UpcomingAppointments { appointments: d.appointments.clone() }
                }
            },
            Some(Err(err)) => rsx! { DashboardError { error: err.clone() } },
            None => rsx! { DashboardLoading {} },
        }
    }
}

#[component]
fn BidsSection(bids: Vec<Bid>) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "My Bids" } }
            CardContent {
                if bids.is_empty() {
                    p { class: "empty-state", "No bids submitted." }
                } else {
                    ul { class: "dashboard-list",
                        for bid in bids {
                            li { key: "{bid.id}", class: "dashboard-list-item",
                                div { class: "dashboard-list-main",
                                    span { class: "dashboard-list-title", "{bid.case_title}" }
                                    span { class: "dashboard-list-meta",
                                        "{format_currency(bid.amount)}"
                                        if let Some(at) = bid.submitted_at.as_deref() {
                                            " · {format_date_human(at)}"
                                        }
                                    }
                                }
                                Badge { variant: bid_variant(&bid.status), "{bid.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
