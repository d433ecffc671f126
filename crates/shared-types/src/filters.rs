//! Client-side filtering over already-fetched lists. No pagination, no caching:
//! every filter walks the full slice and returns borrowed matches.

use crate::{CaseStatus, CaseSummary, Role, UserRecord, UserStatus};

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Filter for the admin users table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub status: Option<UserStatus>,
    pub role: Option<Role>,
    pub search: String,
}

impl UserFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        self.status.map_or(true, |s| user.status == s)
            && self.role.map_or(true, |r| user.role == r)
            && (contains_ci(&user.username, &needle) || contains_ci(&user.email, &needle))
    }

    pub fn apply<'a>(&self, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

/// Filter for case lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    pub status: Option<CaseStatus>,
    pub search: String,
}

impl CaseFilter {
    pub fn matches(&self, case: &CaseSummary) -> bool {
        let needle = self.search.trim().to_lowercase();
        self.status.map_or(true, |s| case.status == s)
            && (contains_ci(&case.title, &needle)
                || contains_ci(&case.description, &needle)
                || case
                    .category
                    .as_deref()
                    .is_some_and(|c| !needle.is_empty() && contains_ci(c, &needle)))
    }

    pub fn apply<'a>(&self, cases: &'a [CaseSummary]) -> Vec<&'a CaseSummary> {
        cases.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filter for the lawyer directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LawyerFilter {
    pub specialization: String,
    pub location: String,
}

impl LawyerFilter {
    pub fn matches(&self, lawyer: &UserRecord) -> bool {
        let spec = self.specialization.trim().to_lowercase();
        let loc = self.location.trim().to_lowercase();
        lawyer.role == Role::Lawyer
            && contains_ci(lawyer.specialization.as_deref().unwrap_or(""), &spec)
            && contains_ci(lawyer.location.as_deref().unwrap_or(""), &loc)
    }

    pub fn apply<'a>(&self, lawyers: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        lawyers.iter().filter(|l| self.matches(l)).collect()
    }
}
