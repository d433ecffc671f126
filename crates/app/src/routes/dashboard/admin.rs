use api_client::load_admin_dashboard;
use dioxus::prelude::*;
use shared_types::{Notification, UserRecord};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    PageHeader, StatGrid,
};

use super::{DashboardError, DashboardLoading, RecentCases};
use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_date_human;
use crate::notify::{Notice, NoticeBanner};
use crate::routes::Route;

/// Admin home: platform counters, lawyers waiting for review and unread notifications.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let loader = api.clone();
    let mut data = use_resource(move || {
        let api = loader.clone();
        async move {
            let result = load_admin_dashboard(&api).await;
            auth.observe(&result);
            result
        }
    });

    let decide = move |(user_id, approve): (String, bool)| {
        let api = api.clone();
        spawn(async move {
            let result = if approve {
                api.approve_lawyer(&user_id).await
            } else {
                api.reject_lawyer(&user_id).await
            };
            auth.observe(&result);
            notice.set(Some(Notice::from_result(&result, |m| m.clone())));
            if result.is_ok() {
                data.restart();
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
        PageHeader { title: "Admin Dashboard", subtitle: "Platform overview" }
        NoticeBanner { notice }

        match &*data.read() {
            Some(Ok(d)) => {
                let pending: Vec<UserRecord> =
                    d.users.iter().filter(|u| u.is_pending_lawyer()).cloned().collect();
                let unread: Vec<Notification> =
                    d.notifications.iter().filter(|n| !n.read).cloned().collect();
                rsx! {
                    StatGrid { tiles: d.overview.tiles() }
                    div { class: "dashboard-grid",
                        PendingLawyers { lawyers: pending, on_decide: decide }
                        UnreadNotifications { notifications: unread }
                        RecentCases { title: "Recent Cases", cases: d.cases.clone() }
                    }
                }
            }
            Some(Err(err)) => rsx! { DashboardError { error: err.clone() } },
            None => rsx! { DashboardLoading {} },
        }
    }
}

#[component]
fn PendingLawyers(lawyers: Vec<UserRecord>, on_decide: EventHandler<(String, bool)>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Pending Lawyer Approvals" }
            }
            CardContent {
                if lawyers.is_empty() {
                    p { class: "empty-state", "No lawyers waiting for review." }
                } else {
                    ul { class: "dashboard-list",
                        for lawyer in lawyers {
                            {
                                let approve_id = lawyer.id.clone();
                                let reject_id = lawyer.id.clone();
                                let detail = [lawyer.specialization.as_deref(), lawyer.location.as_deref()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" · ");
                                rsx! {
                                    li { key: "{lawyer.id}", class: "dashboard-list-item",
                                        div { class: "dashboard-list-main",
                                            span { class: "dashboard-list-title", "{lawyer.username}" }
                                            span { class: "dashboard-list-meta", "{lawyer.email}" }
                                            if !detail.is_empty() {
                                                span { class: "dashboard-list-meta", "{detail}" }
                                            }
                                        }
                                        div { class: "dashboard-list-actions",
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: move |_| on_decide.call((approve_id.clone(), true)),
                                                "Approve"
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: move |_| on_decide.call((reject_id.clone(), false)),
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Link { class: "dashboard-more", to: Route::AdminUsers {}, "Manage all users" }
            }
        }
    }
}

#[component]
fn UnreadNotifications(notifications: Vec<Notification>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Unread Notifications" }
            }
            CardContent {
                if notifications.is_empty() {
                    p { class: "empty-state", "You're all caught up." }
                } else {
                    ul { class: "dashboard-list",
                        for note in notifications.into_iter().take(5) {
                            li { key: "{note.id}", class: "dashboard-list-item",
                                div { class: "dashboard-list-main",
                                    span { class: "dashboard-list-title", "{note.message}" }
                                    if let Some(at) = note.created_at.as_deref() {
                                        span { class: "dashboard-list-meta", "{format_date_human(at)}" }
                                    }
                                }
                                if let Some(kind) = note.kind.as_ref() {
                                    Badge { variant: BadgeVariant::Secondary, "{kind}" }
                                }
                            }
                        }
                    }
                }
                Link { class: "dashboard-more", to: Route::AdminNotifications {}, "View all notifications" }
            }
        }
    }
}
