use serde::{Deserialize, Serialize};

/// Marketplace role controlling which dashboard and navigation set is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    #[serde(alias = "client", alias = "CLIENT")]
    Client,
    #[serde(alias = "lawyer", alias = "LAWYER")]
    Lawyer,
    #[serde(alias = "admin", alias = "ADMIN")]
    Admin,
}

/// Roles a visitor may pick on the registration form.
pub const REGISTRATION_ROLES: &[Role] = &[Role::Client, Role::Lawyer];

impl Role {
    /// Parse a role claim. Unknown values default to Client.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lawyer" => Role::Lawyer,
            "admin" => Role::Admin,
            _ => Role::Client,
        }
    }

    /// Wire/display form ("Client", "Lawyer", "Admin").
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Lawyer => "Lawyer",
            Role::Admin => "Admin",
        }
    }
}

/// Account lifecycle status. Owned by the server; the client only filters on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    #[serde(alias = "active", alias = "approved", alias = "Approved")]
    Active,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "rejected")]
    Rejected,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Pending => "Pending",
            UserStatus::Rejected => "Rejected",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" | "approved" => Some(UserStatus::Active),
            "pending" => Some(UserStatus::Pending),
            "rejected" => Some(UserStatus::Rejected),
            _ => None,
        }
    }
}

/// Display identity recovered from the bearer token payload.
///
/// Never used for authorization decisions: it only labels the UI and picks
/// the dashboard. The backend re-checks everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_display_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub profile_image: Option<String>,
}

fn default_display_name() -> String {
    "User".to_string()
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: default_display_name(),
            email: String::new(),
            phone: String::new(),
            role: Role::Client,
            profile_image: None,
        }
    }
}

impl Identity {
    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}

/// A user account as listed by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "license_file")]
    pub license_file: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl UserRecord {
    pub fn is_pending_lawyer(&self) -> bool {
        self.role == Role::Lawyer && self.status == UserStatus::Pending
    }
}

/// Lifecycle of a legal case as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaseStatus {
    #[default]
    #[serde(alias = "open")]
    Open,
    #[serde(alias = "in_progress", alias = "in-progress", alias = "In Progress")]
    InProgress,
    #[serde(alias = "closed")]
    Closed,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Closed => "Closed",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "open" => Some(CaseStatus::Open),
            "in_progress" | "inprogress" => Some(CaseStatus::InProgress),
            "closed" => Some(CaseStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub lawyer_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseDocument {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    pub event: String,
}

/// A case with its attached documents and history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetail {
    #[serde(flatten)]
    pub summary: CaseSummary,
    #[serde(default)]
    pub documents: Vec<CaseDocument>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    #[serde(default, alias = "isRead")]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    /// ISO-8601 start time.
    pub scheduled_at: String,
    #[serde(default)]
    pub with_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(alias = "_id")]
    pub id: String,
    pub case_title: String,
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Per-role dashboard counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub active_cases: u32,
    #[serde(default)]
    pub upcoming_appointments: u32,
    #[serde(default)]
    pub unread_messages: u32,
    #[serde(default)]
    pub pending_bids: u32,
}

/// A single labelled counter on a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: u32,
}

impl DashboardStats {
    /// Tiles in display order.
    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile { label: "Active Cases", value: self.active_cases },
            StatTile { label: "Upcoming Appointments", value: self.upcoming_appointments },
            StatTile { label: "Unread Messages", value: self.unread_messages },
            StatTile { label: "Pending Bids", value: self.pending_bids },
        ]
    }
}

/// Admin dashboard counters, derived client-side from the fetched lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminOverview {
    pub total_users: usize,
    pub total_lawyers: usize,
    pub pending_lawyers: usize,
    pub total_cases: usize,
    pub unread_notifications: usize,
}

impl AdminOverview {
    pub fn compute(users: &[UserRecord], cases: &[CaseSummary], notifications: &[Notification]) -> Self {
        Self {
            total_users: users.len(),
            total_lawyers: users.iter().filter(|u| u.role == Role::Lawyer).count(),
            pending_lawyers: users.iter().filter(|u| u.is_pending_lawyer()).count(),
            total_cases: cases.len(),
            unread_notifications: notifications.iter().filter(|n| !n.read).count(),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        vec![
            StatTile { label: "Total Users", value: count(self.total_users) },
            StatTile { label: "Lawyers", value: count(self.total_lawyers) },
            StatTile { label: "Pending Approvals", value: count(self.pending_lawyers) },
            StatTile { label: "Cases", value: count(self.total_cases) },
            StatTile { label: "Unread Notifications", value: count(self.unread_notifications) },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::from_str_or_default("LAWYER"), Role::Lawyer);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("paralegal"), Role::Client);
        let role: Role = serde_json::from_str(r#""lawyer""#).unwrap();
        assert_eq!(role, Role::Lawyer);
    }

    #[test]
    fn stats_tiles_keep_display_order() {
        let stats = DashboardStats {
            active_cases: 2,
            upcoming_appointments: 3,
            unread_messages: 5,
            pending_bids: 1,
        };
        let tiles: Vec<(&str, u32)> = stats.tiles().iter().map(|t| (t.label, t.value)).collect();
        assert_eq!(
            tiles,
            vec![
                ("Active Cases", 2),
                ("Upcoming Appointments", 3),
                ("Unread Messages", 5),
                ("Pending Bids", 1),
            ]
        );
    }

    #[test]
    fn stats_deserialize_from_camel_case() {
        let json = r#"{"activeCases":2,"upcomingAppointments":3,"unreadMessages":5,"pendingBids":1}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.unread_messages, 5);
        assert_eq!(stats.pending_bids, 1);
    }

    #[test]
    fn user_record_accepts_mongo_style_id_and_lowercase_enums() {
        let json = r#"{"_id":"u1","username":"amara","email":"a@x.io","role":"lawyer","status":"pending"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_pending_lawyer());
    }

    #[test]
    fn case_detail_flattens_summary() {
        let json = r#"{
            "id":"c9","title":"Lease dispute","status":"in_progress",
            "documents":[{"name":"lease.pdf"}],
            "timeline":[{"date":"2026-01-02","event":"Filed"}]
        }"#;
        let detail: CaseDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.status, CaseStatus::InProgress);
        assert_eq!(detail.documents.len(), 1);
        assert_eq!(detail.timeline[0].event, "Filed");
    }

    #[test]
    fn identity_initials() {
        let mut id = Identity::default();
        assert_eq!(id.initials(), "U");
        id.name = "jane van doe".into();
        assert_eq!(id.initials(), "JV");
    }

    #[test]
    fn admin_overview_counts() {
        let users = vec![
            UserRecord {
                id: "1".into(),
                username: "a".into(),
                email: "a@x".into(),
                role: Role::Lawyer,
                status: UserStatus::Pending,
                phone: None,
                specialization: None,
                location: None,
                license_file: None,
                created_at: None,
            },
            UserRecord {
                id: "2".into(),
                username: "b".into(),
                email: "b@x".into(),
                role: Role::Client,
                status: UserStatus::Active,
                phone: None,
                specialization: None,
                location: None,
                license_file: None,
                created_at: None,
            },
        ];
        let notes = vec![Notification {
            id: "n".into(),
            message: "New lawyer".into(),
            kind: None,
            read: false,
            created_at: None,
        }];
        let overview = AdminOverview::compute(&users, &[], &notes);
        assert_eq!(overview.total_users, 2);
        assert_eq!(overview.total_lawyers, 1);
        assert_eq!(overview.pending_lawyers, 1);
        assert_eq!(overview.unread_notifications, 1);
    }
}
