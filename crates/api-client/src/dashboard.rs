//! Role-scoped reads shared by the client and lawyer dashboards.

use shared_types::{AppError, Appointment, Bid, CaseDetail, CaseSummary, DashboardStats, UserRecord};

use crate::request::ApiClient;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let stats: Option<DashboardStats> = self.get("/api/dashboard/stats").await?;
        Ok(stats.unwrap_or_default())
    }

    /// Cases visible to the signed-in user. The backend scopes by role.
    pub async fn list_cases(&self) -> Result<Vec<CaseSummary>, AppError> {
        self.get_list("/api/cases").await
    }

    pub async fn get_case(&self, id: &str) -> Result<CaseDetail, AppError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::not_found("Case not found"));
        }
        self.get(&format!("/api/cases/{id}")).await
    }

    pub async fn list_lawyers(&self) -> Result<Vec<UserRecord>, AppError> {
        self.get_list("/api/users/lawyers").await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.get_list("/api/appointments").await
    }

    pub async fn list_bids(&self) -> Result<Vec<Bid>, AppError> {
        self.get_list("/api/bids").await
    }
}
