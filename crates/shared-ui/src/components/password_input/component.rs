use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;

use crate::Input;

/// The `type` attribute for a password field in the given visibility.
pub fn input_type_for(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Password field with a show/hide toggle.
///
/// The toggle only switches the rendered input type; `value` is owned by the
/// caller and never touched here.
#[component]
pub fn PasswordInput(
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = "Password".to_string())] label: String,
    #[props(default = "password".to_string())] name: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] start_visible: bool,
    error: Option<String>,
) -> Element {
    let mut visible = use_signal(|| start_visible);
    let shown = visible();
    let toggle_label = if shown { "Hide password" } else { "Show password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "password-input",
            Input {
                input_type: input_type_for(shown).to_string(),
                name,
                label,
                placeholder,
                value,
                required: true,
                error,
                on_input: move |evt| on_input.call(evt),
            }
            button {
                r#type: "button",
                class: "password-toggle",
                "aria-label": toggle_label,
                "aria-pressed": shown,
                onclick: move |_| visible.set(!shown),
                if shown {
                    Icon { icon: LdEyeOff, width: 16, height: 16 }
                } else {
                    Icon { icon: LdEye, width: 16, height: 16 }
                }
            }
        }
    }
}
