use dioxus::prelude::*;
use shared_types::Notification;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, FormMessage, PageHeader, SkeletonList};

use crate::auth::{use_api, use_auth, use_is_admin};
use crate::format_helpers::format_datetime_human;
use crate::notify::{Notice, NoticeBanner};
use crate::routes::AdminOnly;

#[component]
pub fn AdminNotifications() -> Element {
    if !use_is_admin() {
        return rsx! { AdminOnly {} };
    }
    rsx! { NotificationsScreen {} }
}

#[component]
fn NotificationsScreen() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let loader = api.clone();
    let mut notifications = use_resource(move || {
        let api = loader.clone();
        async move {
            let result = api.list_admin_notifications().await;
            auth.observe(&result);
            result
        }
    });

    let mark_read = move |id: String| {
        let api = api.clone();
        spawn(async move {
            let result = api.mark_notification_read(&id).await;
            auth.observe(&result);
            match result {
                Ok(()) => notifications.restart(),
                Err(err) => notice.set(Some(Notice::error(&err))),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/listing.css") }
        PageHeader { title: "Notifications", subtitle: "Registrations and platform events" }
        NoticeBanner { notice }

        match &*notifications.read() {
            Some(Ok(list)) => rsx! { NotificationTable { notifications: list.clone(), on_mark_read: mark_read } },
            Some(Err(err)) => rsx! { FormMessage { message: err.message.clone() } },
            None => rsx! { Card { CardContent { SkeletonList { rows: 5 } } } },
        }
    }
}

#[component]
fn NotificationTable(
    notifications: Vec<Notification>,
    #[props(default)] on_mark_read: EventHandler<String>,
) -> Element {
    if notifications.is_empty() {
        return rsx! { p { class: "empty-state", "No notifications." } };
    }
    let unread = notifications.iter().filter(|n| !n.read).count();

    rsx! {
        p { class: "listing-count", "{unread} unread of {notifications.len()}" }
        table { class: "listing-table",
            thead {
                tr {
                    th { "Message" }
                    th { "Type" }
                    th { "Received" }
                    th { "" }
                }
            }
            tbody {
                for note in notifications {
                    {
                        let id = note.id.clone();
                        rsx! {
                            tr { key: "{note.id}", class: if note.read { "" } else { "unread" },
                                td { "{note.message}" }
                                td {
                                    if let Some(kind) = note.kind.as_ref() {
                                        Badge { variant: BadgeVariant::Secondary, "{kind}" }
                                    }
                                }
                                td { {note.created_at.as_deref().map(format_datetime_human).unwrap_or_default()} }
                                td {
                                    if !note.read {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| on_mark_read.call(id.clone()),
                                            "Mark as read"
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
}
