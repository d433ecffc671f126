use dioxus::prelude::*;
use shared_types::{AppError, Role, UserFilter, UserRecord, UserStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, FormMessage, FormSelect, Input,
    PageHeader, SkeletonList,
};

use crate::auth::{use_api, use_auth, use_is_admin};
use crate::format_helpers::format_date_human;
use crate::notify::{Notice, NoticeBanner};
use crate::routes::AdminOnly;

const STATUS_OPTIONS: [UserStatus; 3] = [UserStatus::Active, UserStatus::Pending, UserStatus::Rejected];
const ROLE_OPTIONS: [Role; 3] = [Role::Client, Role::Lawyer, Role::Admin];

#[derive(Debug, Clone, PartialEq)]
enum UserAction {
    Approve,
    Reject,
    Delete,
}

/// Every account on the platform, with moderation for pending lawyers.
#[component]
pub fn AdminUsers() -> Element {
    if !use_is_admin() {
        return rsx! { AdminOnly {} };
    }
    rsx! { UsersScreen {} }
}

#[component]
fn UsersScreen() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut status = use_signal(|| Option::<UserStatus>::None);
    let mut role = use_signal(|| Option::<Role>::None);
    let mut search = use_signal(String::new);
    let mut confirm_delete = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let loader = api.clone();
    let mut users = use_resource(move || {
        let api = loader.clone();
        async move {
            let result = api.list_users().await;
            auth.observe(&result);
            result
        }
    });

    let act = move |(user_id, action): (String, UserAction)| {
        let api = api.clone();
        spawn(async move {
            let result: Result<String, AppError> = match action {
                UserAction::Approve => api.approve_lawyer(&user_id).await,
                UserAction::Reject => api.reject_lawyer(&user_id).await,
                UserAction::Delete => api.delete_user(&user_id).await.map(|()| "User deleted".to_string()),
            };
            auth.observe(&result);
            notice.set(Some(Notice::from_result(&result, |m| m.clone())));
            confirm_delete.set(None);
            if result.is_ok() {
                users.restart();
            }
        });
    };

    let filter = UserFilter { status: status(), role: role(), search: search() };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/listing.css") }
        PageHeader { title: "Users", subtitle: "Approve lawyers and manage accounts" }
        NoticeBanner { notice }

        div { class: "filter-bar",
            Input {
                name: "user-search",
                label: "Search",
                placeholder: "Username or email",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
            FormSelect {
                name: "user-status",
                label: "Status",
                value: status().map(|s| s.as_str().to_string()).unwrap_or_default(),
                onchange: move |e: FormEvent| status.set(UserStatus::from_str_opt(&e.value())),
                option { value: "", "All statuses" }
                for s in STATUS_OPTIONS {
                    option { key: "{s.as_str()}", value: s.as_str(), selected: status() == Some(s), "{s.as_str()}" }
                }
            }
            FormSelect {
                name: "user-role",
                label: "Role",
                value: role().map(|r| r.as_str().to_string()).unwrap_or_default(),
                onchange: move |e: FormEvent| {
                    let value = e.value();
                    role.set((!value.is_empty()).then(|| Role::from_str_or_default(&value)));
                },
                option { value: "", "All roles" }
                for r in ROLE_OPTIONS {
                    option { key: "{r.as_str()}", value: r.as_str(), selected: role() == Some(r), "{r.as_str()}" }
                }
            }
        }

        match &*users.read() {
            Some(Ok(all)) => rsx! {
                UserTable {
                    users: filter.apply(all).into_iter().cloned().collect::<Vec<_>>(),
                    total: all.len(),
                    confirming: confirm_delete(),
                    on_action: act,
                    on_confirm: move |id: Option<String>| confirm_delete.set(id),
                }
            },
            Some(Err(err)) => rsx! { FormMessage { message: err.message.clone() } },
            None => rsx! { Card { CardContent { SkeletonList { rows: 6 } } } },
        }
    }
}

#[component]
fn UserTable(
    users: Vec<UserRecord>,
    total: usize,
    confirming: Option<String>,
    #[props(default)] on_action: EventHandler<(String, UserAction)>,
    #[props(default)] on_confirm: EventHandler<Option<String>>,
) -> Element {
    if users.is_empty() {
        let text = if total == 0 { "No users yet." } else { "No users match these filters." };
        return rsx! { p { class: "empty-state", "{text}" } };
    }

    rsx! {
        p { class: "listing-count", "Showing {users.len()} of {total}" }
        table { class: "listing-table",
            thead {
                tr {
                    th { "Username" }
                    th { "Email" }
                    th { "Role" }
                    th { "Status" }
                    th { "Joined" }
                    th { "" }
                }
            }
            tbody {
                for user in users {
                    {
                        let pending = user.is_pending_lawyer();
                        let awaiting_confirm = confirming.as_deref() == Some(user.id.as_str());
                        let (approve, reject, delete, ask) =
                            (user.id.clone(), user.id.clone(), user.id.clone(), user.id.clone());
                        rsx! {
                            tr { key: "{user.id}",
                                td { "{user.username}" }
                                td { "{user.email}" }
                                td { "{user.role.as_str()}" }
                                td {
                                    Badge { variant: BadgeVariant::for_user_status(user.status), "{user.status.as_str()}" }
                                }
                                td { {user.created_at.as_deref().map(format_date_human).unwrap_or_default()} }
                                td {
                                    div { class: "listing-actions",
                                        if pending {
                                            Button {
                                                onclick: move |_| on_action.call((approve.clone(), UserAction::Approve)),
                                                "Approve"
                                            }
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| on_action.call((reject.clone(), UserAction::Reject)),
                                                "Reject"
                                            }
                                        }
                                        if awaiting_confirm {
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: move |_| on_action.call((delete.clone(), UserAction::Delete)),
                                                "Confirm delete"
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| on_confirm.call(None),
                                                "Cancel"
                                            }
                                        } else if user.role != Role::Admin {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| on_confirm.call(Some(ask.clone())),
                                                "Delete"
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
}
