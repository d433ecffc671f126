use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdMapPin, LdPhone};
use dioxus_free_icons::Icon;
use shared_types::{LawyerFilter, UserRecord};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormMessage,
    Input, PageHeader, SkeletonList,
};

use crate::auth::{use_api, use_auth};
use crate::use_features;

/// Lawyer directory with specialization and location filters.
#[component]
pub fn Lawyers() -> Element {
    let features = use_features();
    let api = use_api();
    let mut auth = use_auth();
    let mut specialization = use_signal(String::new);
    let mut location = use_signal(String::new);

    let lawyers = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.list_lawyers().await;
            auth.observe(&result);
            result
        }
    });

    if !features.lawyer_directory {
        return rsx! {
            div { class: "empty-state", p { "The lawyer directory is not available." } }
        };
    }

    let filter = LawyerFilter {
        specialization: specialization(),
        location: location(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/listing.css") }
        document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
        PageHeader { title: "Find a Lawyer", subtitle: "Browse approved lawyers by practice area and city" }

        div { class: "filter-bar",
            Input {
                name: "specialization",
                label: "Specialization",
                placeholder: "e.g. Family Law",
                value: specialization(),
                on_input: move |e: FormEvent| specialization.set(e.value()),
            }
            Input {
                name: "location",
                label: "Location",
                placeholder: "City",
                value: location(),
                on_input: move |e: FormEvent| location.set(e.value()),
            }
        }

        match &*lawyers.read() {
            Some(Ok(all)) => {
                let hits: Vec<UserRecord> = filter.apply(all).into_iter().cloned().collect();
                if hits.is_empty() {
                    rsx! { p { class: "empty-state", "No lawyers match your search." } }
                } else {
                    rsx! {
                        div { class: "card-grid",
                            for lawyer in hits {
                                LawyerCard { key: "{lawyer.id}", lawyer }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! { FormMessage { message: err.message.clone() } },
            None => rsx! { Card { CardContent { SkeletonList { rows: 4 } } } },
        }
    }
}

#[component]
fn LawyerCard(lawyer: UserRecord) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{lawyer.username}" }
                if let Some(spec) = lawyer.specialization.as_ref() {
                    CardDescription { "{spec}" }
                }
            }
            CardContent {
                ul { class: "dashboard-list",
                    if let Some(city) = lawyer.location.as_ref() {
                        li { class: "dashboard-list-meta",
                            Icon { icon: LdMapPin, width: 14, height: 14 }
                            " {city}"
                        }
                    }
                    li { class: "dashboard-list-meta",
                        Icon { icon: LdMail, width: 14, height: 14 }
                        a { href: "mailto:{lawyer.email}", " {lawyer.email}" }
                    }
                    if let Some(phone) = lawyer.phone.as_ref() {
                        li { class: "dashboard-list-meta",
                            Icon { icon: LdPhone, width: 14, height: 14 }
                            " {phone}"
                        }
                    }
                }
                Badge { variant: BadgeVariant::for_user_status(lawyer.status), "{lawyer.status.as_str()}" }
            }
        }
    }
}
