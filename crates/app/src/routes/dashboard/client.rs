use api_client::load_client_dashboard;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, PageHeader, StatGrid};

use super::{DashboardError, DashboardLoading, RecentCases, UpcomingAppointments};
use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use crate::use_features;

/// Client home: stat tiles, recent cases and upcoming appointments.
#[component]
pub fn ClientDashboard() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let features = use_features();
    let name = auth.identity().name;

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let result = load_client_dashboard(&api).await;
            auth.observe(&result);
            result
        }
    });

    let actions = features.lawyer_directory.then(|| {
        rsx! {
            Link { to: Route::Lawyers {},
                Button { variant: ButtonVariant::Outline, "Find a Lawyer" }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
        PageHeader {
            title: "Welcome, {name}",
            subtitle: "Track your cases and appointments",
            actions,
        }

        match &*data.read() {
            Some(Ok(d)) => rsx! {
                StatGrid { tiles: d.stats.tiles() }
                div { class: "dashboard-grid",
                    RecentCases { title: "Recent Cases", cases: d.cases.clone() }
                    UpcomingAppointments { appointments: d.appointments.clone() }
                }
            },
            Some(Err(err)) => rsx! { DashboardError { error: err.clone() } },
            None => rsx! { DashboardLoading {} },
        }
    }
}
