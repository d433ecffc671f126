use dioxus::prelude::*;
use shared_types::{CaseStatus, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
        }
    }

    pub fn for_user_status(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => BadgeVariant::Success,
            UserStatus::Pending => BadgeVariant::Warning,
            UserStatus::Rejected => BadgeVariant::Destructive,
        }
    }

    pub fn for_case_status(status: CaseStatus) -> Self {
        match status {
            CaseStatus::Open => BadgeVariant::Primary,
            CaseStatus::InProgress => BadgeVariant::Warning,
            CaseStatus::Closed => BadgeVariant::Secondary,
        }
    }
}

/// Small inline pill for statuses and roles.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}
