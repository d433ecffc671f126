use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, Credentials};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormMessage, Input, MessageTone, PasswordInput, Separator,
};

/// Email/password sign-in. Fields keep their values when the attempt fails.
///
/// `notice` carries a message from the registration screen.
#[component]
pub fn Login(notice: Option<String>) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut loading = use_signal(|| false);

    // Already signed in (restored token or just logged in).
    if auth.is_authenticated() || api.session().is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |_: FormEvent| {
        let api = api.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error.set(None);

            let credentials = Credentials::new(email(), password());
            match api.login(&credentials).await {
                Ok(session) => {
                    tracing::debug!(role = session.identity.role.as_str(), "signed in");
                    auth.signed_in(session);
                    navigator().push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        }
    };

    let current_error = error();
    let field = |name: &str| current_error.as_ref().and_then(|e| e.field_error(name)).map(str::to_string);
    let banner = current_error
        .as_ref()
        .filter(|e| e.field_errors.is_empty())
        .map(|e| e.message.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back to LawLink" }
                }
                CardContent {
                    Form { onsubmit: handle_login,
                        if let Some(notice) = notice.clone().filter(|_| current_error.is_none()) {
                            FormMessage { tone: MessageTone::Success, message: notice }
                        }
                        FormMessage { message: banner }
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            error: field("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        PasswordInput {
                            value: password(),
                            placeholder: "Enter your password",
                            error: field("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }
                CardFooter {
                    Separator { caption: "New to LawLink?" }
                    p { class: "auth-link",
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
