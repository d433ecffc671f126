use dioxus::prelude::*;
use shared_types::{AdminProfileUpdate, AppError, NewAdmin, PasswordChange, UploadFile};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, FileInput, Form, FormMessage,
    Input, PageHeader, PasswordInput,
};

use crate::auth::{use_api, use_auth, use_is_admin};
use crate::notify::{Notice, NoticeBanner};
use crate::routes::AdminOnly;
use crate::upload::read_first_file;

const PHOTO_ACCEPT: &str = "image/png,image/jpeg,image/webp";

/// Field message for `name`, if the last error carried one.
fn field_error(error: &Option<AppError>, name: &str) -> Option<String> {
    error.as_ref().and_then(|e| e.field_error(name)).map(str::to_string)
}

/// Banner text only for errors that are not tied to a field.
fn banner(error: &Option<AppError>) -> String {
    error
        .as_ref()
        .filter(|e| e.field_errors.is_empty())
        .map(|e| e.message.clone())
        .unwrap_or_default()
}

/// Admin account settings: profile, password and new admins.
#[component]
pub fn AdminSettings() -> Element {
    if !use_is_admin() {
        return rsx! { AdminOnly {} };
    }
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/dashboard.css") }
        PageHeader { title: "Settings", subtitle: "Your admin account" }
        div { class: "dashboard-grid",
            ProfileForm {}
            PasswordForm {}
            NewAdminForm {}
        }
    }
}

#[component]
fn ProfileForm() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let initial = AdminProfileUpdate::from_identity(&auth.identity());

    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut phone = use_signal(|| initial.phone.clone());
    let mut photo = use_signal(|| Option::<UploadFile>::None);
    let mut photo_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut saving = use_signal(|| false);

    let pick_photo = move |evt: FormEvent| async move {
        photo_error.set(None);
        match read_first_file(&evt).await {
            Ok(file) => photo.set(file),
            Err(msg) => {
                photo.set(None);
                photo_error.set(Some(msg));
            }
        }
    };

    let save = move |_: FormEvent| {
        let api = api.clone();
        async move {
            saving.set(true);
            error.set(None);
            notice.set(None);
            let update = AdminProfileUpdate {
                name: name(),
                email: email(),
                phone: phone(),
                photo: photo(),
            };
            let result = api.update_admin_profile(&update).await;
            auth.observe(&result);
            match result {
                Ok(message) => {
                    notice.set(Some(Notice::success(message)));
                    photo.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
            saving.set(false);
        }
    };

    let current = error();
    let photo_name = photo.read().as_ref().map(|f| f.file_name.clone());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile" }
                CardDescription { "Name, contact details and photo" }
            }
            CardContent {
                Form { onsubmit: save,
                    NoticeBanner { notice }
                    FormMessage { message: banner(&current) }
                    Input {
                        name: "name",
                        label: "Name",
                        required: true,
                        value: name(),
                        error: field_error(&current, "name"),
                        on_input: move |e: FormEvent| name.set(e.value()),
                    }
                    Input {
                        name: "email",
                        label: "Email",
                        input_type: "email",
                        required: true,
                        value: email(),
                        error: field_error(&current, "email"),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Input {
                        name: "phone",
                        label: "Phone",
                        input_type: "tel",
                        value: phone(),
                        on_input: move |e: FormEvent| phone.set(e.value()),
                    }
                    FileInput {
                        name: "profile_photo",
                        label: "Profile photo (optional)",
                        accept: PHOTO_ACCEPT,
                        selected: photo_name,
                        error: photo_error().or_else(|| field_error(&current, "profile_photo")),
                        on_change: pick_photo,
                    }
                    Button { button_type: "submit", loading: saving(), loading_label: "Saving...", "Save profile" }
                }
            }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut saving = use_signal(|| false);

    let save = move |_: FormEvent| {
        let api = api.clone();
        async move {
            saving.set(true);
            error.set(None);
            notice.set(None);
            let change = PasswordChange {
                current_password: current_password(),
                new_password: new_password(),
                confirm_password: confirm_password(),
            };
            let result = api.change_admin_password(&change).await;
            auth.observe(&result);
            match result {
                Ok(message) => {
                    notice.set(Some(Notice::success(message)));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => error.set(Some(err)),
            }
            saving.set(false);
        }
    };

    let current = error();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Password" }
                CardDescription { "At least 8 characters" }
            }
            CardContent {
                Form { onsubmit: save,
                    NoticeBanner { notice }
                    FormMessage { message: banner(&current) }
                    PasswordInput {
                        name: "current_password",
                        label: "Current password",
                        value: current_password(),
                        error: field_error(&current, "current_password"),
                        on_input: move |e: FormEvent| current_password.set(e.value()),
                    }
                    PasswordInput {
                        name: "new_password",
                        label: "New password",
                        value: new_password(),
                        error: field_error(&current, "new_password"),
                        on_input: move |e: FormEvent| new_password.set(e.value()),
                    }
                    PasswordInput {
                        name: "confirm_password",
                        label: "Confirm new password",
                        value: confirm_password(),
                        error: field_error(&current, "confirm_password"),
                        on_input: move |e: FormEvent| confirm_password.set(e.value()),
                    }
                    Button { button_type: "submit", loading: saving(), loading_label: "Updating...", "Change password" }
                }
            }
        }
    }
}

#[component]
fn NewAdminForm() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut saving = use_signal(|| false);

    let create = move |_: FormEvent| {
        let api = api.clone();
        async move {
            saving.set(true);
            error.set(None);
            notice.set(None);
            let admin = NewAdmin {
                username: username(),
                email: email(),
                password: password(),
            };
            let result = api.add_admin(&admin).await;
            auth.observe(&result);
            match result {
                Ok(message) => {
                    notice.set(Some(Notice::success(message)));
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                }
                Err(err) => error.set(Some(err)),
            }
            saving.set(false);
        }
    };

    let current = error();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Add Admin" }
                CardDescription { "Create another administrator account" }
            }
            CardContent {
                Form { onsubmit: create,
                    NoticeBanner { notice }
                    FormMessage { message: banner(&current) }
                    Input {
                        name: "username",
                        label: "Username",
                        required: true,
                        value: username(),
                        error: field_error(&current, "username"),
                        on_input: move |e: FormEvent| username.set(e.value()),
                    }
                    Input {
                        name: "email",
                        label: "Email",
                        input_type: "email",
                        required: true,
                        value: email(),
                        error: field_error(&current, "email"),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    PasswordInput {
                        value: password(),
                        error: field_error(&current, "password"),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    Button { button_type: "submit", loading: saving(), loading_label: "Creating...", "Add admin" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_errors_suppress_the_banner() {
        let mismatch = Some(AppError::field("confirm_password", "Passwords do not match"));
        assert_eq!(banner(&mismatch), "");
        assert_eq!(
            field_error(&mismatch, "confirm_password").as_deref(),
            Some("Passwords do not match")
        );

        let server = Some(AppError::server("Current password is incorrect"));
        assert_eq!(banner(&server), "Current password is incorrect");
        assert_eq!(field_error(&server, "confirm_password"), None);
    }

    #[test]
    fn mismatched_confirmation_is_caught_before_sending() {
        let change = PasswordChange {
            current_password: "old-secret".into(),
            new_password: "new-secret-1".into(),
            confirm_password: "new-secret-2".into(),
        };
        let err = change.check().unwrap_err();
        assert_eq!(
            field_error(&Some(err), "confirm_password").as_deref(),
            Some("Passwords do not match")
        );
    }
}
