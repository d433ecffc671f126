use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use validator::{Validate, ValidationError};

use crate::{AppError, Identity, Role};

/// Multipart field carrying the lawyer's license document.
pub const LICENSE_FILE_FIELD: &str = "license_file";
/// Multipart field carrying the admin profile photo.
pub const PROFILE_PHOTO_FIELD: &str = "profile_photo";

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LEN: u64 = 8;

/// Required text fields are trimmed before sending, so whitespace alone counts as empty.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Login form payload. Lives only in form state until submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct Credentials {
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

/// A file chosen in a browser file input.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| mime_from_filename(&file_name).to_string());
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Best-effort MIME type guess for uploads without one.
pub fn mime_from_filename(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Fields only a lawyer fills in.
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct LawyerDetails {
    #[validate(custom(function = "not_blank", message = "Specialization is required"))]
    pub specialization: String,
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,
    pub license: Option<UploadFile>,
}

/// Registration form payload.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RegistrationRequest {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: Role,
    #[validate(custom(function = "not_blank", message = "Phone number is required"))]
    pub phone: String,
    /// Only read when `role` is `Lawyer`.
    pub lawyer: Option<LawyerDetails>,
}

/// One part of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl MultipartPart {
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }

    fn text(name: &str, value: &str) -> Self {
        MultipartPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Body of a request that may or may not carry a file.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(Vec<MultipartPart>),
}

impl RequestBody {
    /// Build a body from flat text fields, switching to multipart only when a
    /// file is attached.
    pub fn from_fields(fields: Map<String, Value>, file: Option<(&str, &UploadFile)>) -> Self {
        match file {
            None => RequestBody::Json(Value::Object(fields)),
            Some((field, upload)) => {
                let mut parts: Vec<MultipartPart> = fields
                    .iter()
                    .map(|(k, v)| match v {
                        Value::String(s) => MultipartPart::text(k, s),
                        other => MultipartPart::text(k, &other.to_string()),
                    })
                    .collect();
                parts.push(MultipartPart::File {
                    name: field.to_string(),
                    file: upload.clone(),
                });
                RequestBody::Multipart(parts)
            }
        }
    }

    /// Names of every field that would be sent.
    pub fn field_names(&self) -> Vec<String> {
        match self {
            RequestBody::Json(Value::Object(map)) => map.keys().cloned().collect(),
            RequestBody::Json(_) => Vec::new(),
            RequestBody::Multipart(parts) => parts.iter().map(|p| p.name().to_string()).collect(),
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

impl RegistrationRequest {
    /// Validate the form, including the lawyer-only fields when relevant.
    pub fn check(&self) -> Result<(), AppError> {
        let mut err = self.validate().err().map(AppError::from);

        if self.role == Role::Lawyer {
            let lawyer_errors = match &self.lawyer {
                Some(details) => details.validate().err().map(AppError::from),
                None => Some(AppError::field("specialization", "Specialization is required")),
            };
            if let Some(lawyer_err) = lawyer_errors {
                match err.as_mut() {
                    Some(e) => e.field_errors.extend(lawyer_err.field_errors),
                    None => err = Some(lawyer_err),
                }
            }
        }

        match err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Lawyer details, but only when the selected role is Lawyer.
    pub fn lawyer_details(&self) -> Option<&LawyerDetails> {
        match self.role {
            Role::Lawyer => self.lawyer.as_ref(),
            _ => None,
        }
    }

    /// Build the submitted body. Lawyer-only fields are dropped for every
    /// other role; the body is multipart only when a license file is attached.
    pub fn payload(&self) -> RequestBody {
        let mut fields = Map::new();
        fields.insert("username".into(), json!(self.username.trim()));
        fields.insert("email".into(), json!(self.email.trim()));
        fields.insert("password".into(), json!(self.password));
        fields.insert("role".into(), json!(self.role.as_str()));
        fields.insert("phone".into(), json!(self.phone.trim()));

        let details = self.lawyer_details();
        if let Some(details) = details {
            fields.insert("specialization".into(), json!(details.specialization.trim()));
            fields.insert("location".into(), json!(details.location.trim()));
        }

        let file = details
            .and_then(|d| d.license.as_ref())
            .map(|f| (LICENSE_FILE_FIELD, f));
        RequestBody::from_fields(fields, file)
    }
}

/// Successful login/registration answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthResponse {
    #[serde(default, alias = "accessToken", alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Plain `{ "message": ... }` answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body for the approve/reject lawyer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LawyerDecision {
    pub user_id: String,
}

/// Admin profile form.
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct AdminProfileUpdate {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    pub phone: String,
    pub photo: Option<UploadFile>,
}

impl AdminProfileUpdate {
    /// Prefill the form from the current identity.
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            phone: identity.phone.clone(),
            photo: None,
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }

    pub fn payload(&self) -> RequestBody {
        let mut fields = Map::new();
        fields.insert("name".into(), json!(self.name.trim()));
        fields.insert("email".into(), json!(self.email.trim()));
        fields.insert("phone".into(), json!(self.phone.trim()));
        let file = self.photo.as_ref().map(|f| (PROFILE_PHOTO_FIELD, f));
        RequestBody::from_fields(fields, file)
    }
}

/// Admin password change form.
#[derive(Debug, Clone, Serialize, PartialEq, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)?;
        if self.new_password != self.confirm_password {
            return Err(AppError::field("confirm_password", "Passwords do not match"));
        }
        Ok(())
    }
}

/// Admin-only form creating another admin account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct NewAdmin {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl NewAdmin {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
