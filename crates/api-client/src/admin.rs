//! Admin-only endpoints: user moderation, notifications and account settings.

use reqwest::Method;
use shared_types::{
    AdminProfileUpdate, AppError, LawyerDecision, MessageResponse, NewAdmin, Notification,
    PasswordChange, UserRecord,
};

use crate::request::{ApiClient, Auth};

fn message_or(response: Option<MessageResponse>, fallback: &str) -> String {
    response
        .map(|r| r.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn require_id(id: &str) -> Result<&str, AppError> {
    let id = id.trim();
    if id.is_empty() {
        Err(AppError::field("id", "A user must be selected"))
    } else {
        Ok(id)
    }
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, AppError> {
        self.get_list("/api/users").await
    }

    pub async fn list_admin_notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.get_list("/api/notifications/admin/notifications").await
    }

    pub async fn approve_lawyer(&self, user_id: &str) -> Result<String, AppError> {
        let body = LawyerDecision { user_id: require_id(user_id)?.to_string() };
        let response = self
            .send_json(Method::PUT, "/api/users/approve-lawyer", &body, Auth::Bearer)
            .await?;
        Ok(message_or(response, "Lawyer approved"))
    }

    pub async fn reject_lawyer(&self, user_id: &str) -> Result<String, AppError> {
        let body = LawyerDecision { user_id: require_id(user_id)?.to_string() };
        let response = self
            .send_json(Method::PUT, "/api/users/reject-lawyer", &body, Auth::Bearer)
            .await?;
        Ok(message_or(response, "Lawyer rejected"))
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let id = require_id(user_id)?;
        self.send_empty(Method::DELETE, &format!("/api/users/{id}")).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), AppError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::not_found("Notification not found"));
        }
        self.send_empty(Method::PATCH, &format!("/api/notifications/{id}/read")).await
    }

    /// Multipart with a `profile_photo` part when a photo was chosen, JSON otherwise.
    pub async fn update_admin_profile(&self, update: &AdminProfileUpdate) -> Result<String, AppError> {
        update.check()?;
        let response = self
            .send_body(Method::PUT, "/api/users/admin/profile", update.payload(), Auth::Bearer)
            .await?;
        Ok(message_or(response, "Profile updated"))
    }

    pub async fn change_admin_password(&self, change: &PasswordChange) -> Result<String, AppError> {
        change.check()?;
        let response = self
            .send_json(Method::PUT, "/api/users/admin/password", change, Auth::Bearer)
            .await?;
        Ok(message_or(response, "Password updated"))
    }

    pub async fn add_admin(&self, admin: &NewAdmin) -> Result<String, AppError> {
        admin.check()?;
        let response = self
            .send_json(Method::POST, "/api/users/add-admin", admin, Auth::Bearer)
            .await?;
        Ok(message_or(response, "Admin created"))
    }
}
