//! Data-fetching ports the dashboards read through.
//!
//! `ApiClient` is the production implementation; tests swap in fakes so the
//! view logic runs without a backend.

#![allow(async_fn_in_trait)]

use shared_types::{
    AdminOverview, AdminProfileUpdate, AppError, Appointment, Bid, CaseSummary, DashboardStats,
    NewAdmin, Notification, PasswordChange, UserRecord,
};

use crate::request::ApiClient;

pub trait ClientPort {
    async fn stats(&self) -> Result<DashboardStats, AppError>;
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError>;
    async fn lawyers(&self) -> Result<Vec<UserRecord>, AppError>;
    async fn appointments(&self) -> Result<Vec<Appointment>, AppError>;
}

pub trait LawyerPort {
    async fn stats(&self) -> Result<DashboardStats, AppError>;
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError>;
    async fn bids(&self) -> Result<Vec<Bid>, AppError>;
    async fn appointments(&self) -> Result<Vec<Appointment>, AppError>;
}

pub trait AdminPort {
    async fn users(&self) -> Result<Vec<UserRecord>, AppError>;
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError>;
    async fn notifications(&self) -> Result<Vec<Notification>, AppError>;
    async fn approve_lawyer(&self, user_id: &str) -> Result<String, AppError>;
    async fn reject_lawyer(&self, user_id: &str) -> Result<String, AppError>;
    async fn delete_user(&self, user_id: &str) -> Result<(), AppError>;
    async fn mark_notification_read(&self, id: &str) -> Result<(), AppError>;
    async fn update_profile(&self, update: &AdminProfileUpdate) -> Result<String, AppError>;
    async fn change_password(&self, change: &PasswordChange) -> Result<String, AppError>;
    async fn add_admin(&self, admin: &NewAdmin) -> Result<String, AppError>;
}

impl ClientPort for ApiClient {
    async fn stats(&self) -> Result<DashboardStats, AppError> {
        self.dashboard_stats().await
    }
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError> {
        self.list_cases().await
    }
    async fn lawyers(&self) -> Result<Vec<UserRecord>, AppError> {
        self.list_lawyers().await
    }
    async fn appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.list_appointments().await
    }
}

impl LawyerPort for ApiClient {
    async fn stats(&self) -> Result<DashboardStats, AppError> {
        self.dashboard_stats().await
    }
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError> {
        self.list_cases().await
    }
    async fn bids(&self) -> Result<Vec<Bid>, AppError> {
        self.list_bids().await
    }
    async fn appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.list_appointments().await
    }
}

impl AdminPort for ApiClient {
    async fn users(&self) -> Result<Vec<UserRecord>, AppError> {
        self.list_users().await
    }
    async fn cases(&self) -> Result<Vec<CaseSummary>, AppError> {
        self.list_cases().await
    }
    async fn notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.list_admin_notifications().await
    }
    async fn approve_lawyer(&self, user_id: &str) -> Result<String, AppError> {
        ApiClient::approve_lawyer(self, user_id).await
    }
    async fn reject_lawyer(&self, user_id: &str) -> Result<String, AppError> {
        ApiClient::reject_lawyer(self, user_id).await
    }
    async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        ApiClient::delete_user(self, user_id).await
    }
    async fn mark_notification_read(&self, id: &str) -> Result<(), AppError> {
        ApiClient::mark_notification_read(self, id).await
    }
    async fn update_profile(&self, update: &AdminProfileUpdate) -> Result<String, AppError> {
        self.update_admin_profile(update).await
    }
    async fn change_password(&self, change: &PasswordChange) -> Result<String, AppError> {
        self.change_admin_password(change).await
    }
    async fn add_admin(&self, admin: &NewAdmin) -> Result<String, AppError> {
        ApiClient::add_admin(self, admin).await
    }
}

/// Everything the client dashboard shows, fetched in one pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientDashboardData {
    pub stats: DashboardStats,
    pub cases: Vec<CaseSummary>,
    pub appointments: Vec<Appointment>,
}

/// Everything the lawyer dashboard shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LawyerDashboardData {
    pub stats: DashboardStats,
    pub cases: Vec<CaseSummary>,
    pub bids: Vec<Bid>,
    pub appointments: Vec<Appointment>,
}

/// Everything the admin dashboard shows, plus the derived counters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminDashboardData {
    pub users: Vec<UserRecord>,
    pub cases: Vec<CaseSummary>,
    pub notifications: Vec<Notification>,
    pub overview: AdminOverview,
}

// Reads are sequential; the first failure aborts the load.

pub async fn load_client_dashboard(port: &impl ClientPort) -> Result<ClientDashboardData, AppError> {
    Ok(ClientDashboardData {
        stats: port.stats().await?,
        cases: port.cases().await?,
        appointments: port.appointments().await?,
    })
}

pub async fn load_lawyer_dashboard(port: &impl LawyerPort) -> Result<LawyerDashboardData, AppError> {
    Ok(LawyerDashboardData {
        stats: port.stats().await?,
        cases: port.cases().await?,
        bids: port.bids().await?,
        appointments: port.appointments().await?,
    })
}

pub async fn load_admin_dashboard(port: &impl AdminPort) -> Result<AdminDashboardData, AppError> {
    let users = port.users().await?;
    let cases = port.cases().await?;
    let notifications = port.notifications().await?;
    let overview = AdminOverview::compute(&users, &cases, &notifications);
    Ok(AdminDashboardData {
        users,
        cases,
        notifications,
        overview,
    })
}
