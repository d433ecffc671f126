pub mod admin;
pub mod case_detail;
pub mod cases;
pub mod dashboard;
pub mod lawyers;
pub mod login;
pub mod messages;
pub mod not_found;
pub mod register;

use crate::auth::{use_api, use_auth, GuardState};
use crate::use_features;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdLayoutDashboard, LdLogOut, LdMessageSquare, LdScale, LdSettings,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Badge, BadgeVariant, Separator};

use admin::{AdminNotifications, AdminSettings, AdminUsers};
use case_detail::CaseDetail;
use cases::Cases;
use dashboard::Dashboard;
use lawyers::Lawyers;
use login::Login;
use messages::Messages;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:notice")]
    Login { notice: Option<String> },
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/cases")]
    Cases {},
    #[route("/cases/:id")]
    CaseDetail { id: String },
    #[route("/messages")]
    Messages {},
    #[route("/lawyers")]
    Lawyers {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/notifications")]
    AdminNotifications {},
    #[route("/admin/settings")]
    AdminSettings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gate for every protected view.
///
/// Resolves once from the restored session, then follows `AuthState.guard`;
/// anything that signs the user out flips the guard and lands here.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let api = use_api();

    use_effect(move || {
        if *auth.guard.peek() == GuardState::Loading {
            auth.resolve_from(api.session());
        }
    });

    let state = *auth.guard.read();
    match state {
        GuardState::Authenticated => rsx! { Outlet::<Route> {} },
        GuardState::Unauthenticated => {
            navigator().replace(Route::Login { notice: None });
            rsx! {
                div { class: "guard-status", p { "Redirecting to login..." } }
            }
        }
        GuardState::Loading => rsx! {
            div { class: "guard-status", p { "Loading..." } }
        },
    }
}

struct NavEntry {
    to: Route,
    label: &'static str,
}

/// Navigation for a role, honouring the optional-screen flags.
fn nav_entries(role: Role, messaging: bool, lawyer_directory: bool) -> Vec<NavEntry> {
    let mut entries = vec![
        NavEntry { to: Route::Dashboard {}, label: "Dashboard" },
        NavEntry { to: Route::Cases {}, label: "Cases" },
    ];
    if messaging && role != Role::Admin {
        entries.push(NavEntry { to: Route::Messages {}, label: "Messages" });
    }
    if lawyer_directory && role == Role::Client {
        entries.push(NavEntry { to: Route::Lawyers {}, label: "Find a Lawyer" });
    }
    if role == Role::Admin {
        entries.push(NavEntry { to: Route::AdminUsers {}, label: "Users" });
        entries.push(NavEntry { to: Route::AdminNotifications {}, label: "Notifications" });
        entries.push(NavEntry { to: Route::AdminSettings {}, label: "Settings" });
    }
    entries
}

fn nav_icon(label: &str) -> Element {
    match label {
        "Dashboard" => rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "Cases" => rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
        "Messages" => rsx! { Icon { icon: LdMessageSquare, width: 18, height: 18 } },
        "Find a Lawyer" => rsx! { Icon { icon: LdScale, width: 18, height: 18 } },
        "Users" => rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
        "Notifications" => rsx! { Icon { icon: LdBell, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Shell around every protected view: sidebar, user badge and sign-out.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let features = use_features();
    let mut auth = use_auth();
    let api = use_api();

    let identity = auth.identity();
    let links: Vec<(Route, &'static str, &'static str)> =
        nav_entries(identity.role, features.messaging, features.lawyer_directory)
            .into_iter()
            .map(|e| {
                let class = if is_active(&route, &e.to) { "sidebar-link active" } else { "sidebar-link" };
                (e.to, e.label, class)
            })
            .collect();

    let sign_out = move |_| {
        api.logout();
        auth.signed_out();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand", "LawLink" }
                Separator { horizontal: true }
                nav { class: "sidebar-nav",
                    for (to, label, class) in links {
                        Link { key: "{label}", to, class: class.to_string(),
                            {nav_icon(label)}
                            span { "{label}" }
                        }
                    }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    div { class: "topbar-spacer" }
                    div { class: "topbar-user",
                        if let Some(src) = identity.profile_image.clone() {
                            img { class: "avatar", src: "{src}", alt: "{identity.name}" }
                        } else {
                            span { class: "avatar avatar-fallback", "{identity.initials()}" }
                        }
                        span { class: "topbar-name", "{identity.name}" }
                        Badge { variant: BadgeVariant::Secondary, "{identity.role.as_str()}" }
                        button { class: "topbar-signout", r#type: "button", onclick: sign_out,
                            Icon { icon: LdLogOut, width: 16, height: 16 }
                            "Sign Out"
                        }
                    }
                }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Detail pages highlight their list entry.
fn is_active(current: &Route, target: &Route) -> bool {
    match (current, target) {
        (Route::CaseDetail { .. }, Route::Cases {}) => true,
        _ => current == target,
    }
}

/// Shown on admin-only screens for every other role. The backend enforces the
/// same rule; this only avoids rendering a screen full of 403s.
#[component]
pub fn AdminOnly() -> Element {
    rsx! {
        div { class: "empty-state",
            p { "This page is only available to administrators." }
            Link { to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(role: Role, messaging: bool, directory: bool) -> Vec<&'static str> {
        nav_entries(role, messaging, directory)
            .into_iter()
            .map(|e| e.label)
            .collect()
    }

    #[test]
    fn each_role_gets_its_navigation() {
        assert_eq!(
            labels(Role::Client, true, true),
            vec!["Dashboard", "Cases", "Messages", "Find a Lawyer"]
        );
        assert_eq!(labels(Role::Lawyer, true, true), vec!["Dashboard", "Cases", "Messages"]);
        assert_eq!(
            labels(Role::Admin, true, true),
            vec!["Dashboard", "Cases", "Users", "Notifications", "Settings"]
        );
    }

    #[test]
    fn disabled_features_drop_their_entries() {
        assert_eq!(labels(Role::Client, false, false), vec!["Dashboard", "Cases"]);
    }

    #[test]
    fn case_detail_highlights_cases() {
        let detail = Route::CaseDetail { id: "c1".into() };
        assert!(is_active(&detail, &Route::Cases {}));
        assert!(!is_active(&detail, &Route::Dashboard {}));
    }
}
