use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use crate::upload::read_first_file;
use api_client::RegisterOutcome;
use dioxus::prelude::*;
use shared_types::{AppError, LawyerDetails, RegistrationRequest, Role, UploadFile, REGISTRATION_ROLES};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FileInput, Form,
    FormMessage, FormRow, FormSelect, Input, PasswordInput, Separator,
};

const LICENSE_ACCEPT: &str = ".pdf,.png,.jpg,.jpeg,.doc,.docx";

/// Account creation for clients and lawyers. Lawyers also give a
/// specialization, a location and optionally a license document.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_api();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Client);
    let mut specialization = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut license = use_signal(|| Option::<UploadFile>::None);
    let mut file_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_license = move |evt: FormEvent| async move {
        file_error.set(None);
        match read_first_file(&evt).await {
            Ok(file) => license.set(file),
            Err(msg) => {
                license.set(None);
                file_error.set(Some(msg));
            }
        }
    };

    let handle_register = move |_: FormEvent| {
        let api = api.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error.set(None);

            let selected_role = role();
            let request = RegistrationRequest {
                username: username(),
                email: email(),
                password: password(),
                role: selected_role,
                phone: phone(),
                lawyer: (selected_role == Role::Lawyer).then(|| LawyerDetails {
                    specialization: specialization(),
                    location: location(),
                    license: license(),
                }),
            };

            match api.register(&request).await {
                Ok(RegisterOutcome::SignedIn(session)) => {
                    auth.signed_in(session);
                    navigator().push(Route::Dashboard {});
                }
                Ok(RegisterOutcome::Created { message }) => {
                    navigator().push(Route::Login { notice: Some(message) });
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
    let is_lawyer = role() == Role::Lawyer;
    let license_name = license.read().as_ref().map(|f| f.file_name.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card wide",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Join LawLink as a client or as a lawyer" }
                }
                CardContent {
                    Form { onsubmit: handle_register,
                        FormMessage { message: banner }
                        FormRow {
                            Input {
                                name: "username",
                                label: "Username",
                                required: true,
                                value: username(),
                                error: field("username"),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            Input {
                                name: "phone",
                                label: "Phone",
                                input_type: "tel",
                                required: true,
                                value: phone(),
                                error: field("phone"),
                                on_input: move |e: FormEvent| phone.set(e.value()),
                            }
                        }
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            required: true,
                            value: email(),
                            error: field("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        PasswordInput {
                            value: password(),
                            placeholder: "At least 6 characters",
                            error: field("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        FormSelect {
                            name: "role",
                            label: "I am a",
                            required: true,
                            value: role().as_str(),
                            onchange: move |e: FormEvent| role.set(Role::from_str_or_default(&e.value())),
                            for r in REGISTRATION_ROLES.iter() {
                                option { key: "{r.as_str()}", value: r.as_str(), selected: *r == role(), "{r.as_str()}" }
                            }
                        }

                        if is_lawyer {
                            fieldset { class: "auth-lawyer-fields",
                                legend { "Practice details" }
                                FormRow {
                                    Input {
                                        name: "specialization",
                                        label: "Specialization",
                                        placeholder: "e.g. Family Law",
                                        required: true,
                                        value: specialization(),
                                        error: field("specialization"),
                                        on_input: move |e: FormEvent| specialization.set(e.value()),
                                    }
                                    Input {
                                        name: "location",
                                        label: "Location",
                                        placeholder: "City",
                                        required: true,
                                        value: location(),
                                        error: field("location"),
                                        on_input: move |e: FormEvent| location.set(e.value()),
                                    }
                                }
                                FileInput {
                                    name: "license_file",
                                    label: "License document (optional)",
                                    accept: LICENSE_ACCEPT,
                                    selected: license_name,
                                    error: file_error().or_else(|| field("license_file")),
                                    on_change: handle_license,
                                }
                            }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Creating account...",
                            "Create Account"
                        }
                    }
                }
                CardFooter {
                    Separator { caption: "Already registered?" }
                    p { class: "auth-link",
                        Link { to: Route::Login { notice: None }, "Sign in" }
                    }
                }
            }
        }
    }
}
