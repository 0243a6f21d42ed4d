//! Demo-account authentication.
//!
//! There is no auth backend: a fixed table of demo accounts is compiled in
//! and credentials are checked by exact string equality (case-sensitive on
//! both email and password). [`authenticate`] simulates the round-trip with
//! a fixed artificial delay.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::plans::PlanId;

/// Artificial delay applied by [`authenticate`], in milliseconds.
pub const LOGIN_DELAY_MS: u64 = 1000;

/// Account role. Only affects display; permissions come from the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The logged-in user's profile — also the shape of the persisted session
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub level: u32,
    pub points: u32,
    pub plan: PlanId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

struct DemoAccount {
    id: &'static str,
    email: &'static str,
    name: &'static str,
    role: Role,
    level: u32,
    points: u32,
    plan: PlanId,
    password: &'static str,
}

impl DemoAccount {
    fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
            level: self.level,
            points: self.points,
            plan: self.plan,
            avatar: None,
        }
    }
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "1",
        email: "admin@sublynx.com",
        name: "Admin",
        role: Role::Admin,
        level: 10,
        points: 5000,
        plan: PlanId::Pro,
        password: "password123",
    },
    DemoAccount {
        id: "2",
        email: "alex@example.com",
        name: "Alex",
        role: Role::User,
        level: 3,
        points: 1250,
        plan: PlanId::Free,
        password: "password123",
    },
];

/// Emails of the known demo accounts, for the login-failure hint.
pub fn demo_emails() -> Vec<&'static str> {
    DEMO_ACCOUNTS.iter().map(|a| a.email).collect()
}

/// Check credentials against the demo table.
///
/// Exact, case-sensitive comparison on both fields. The returned profile
/// never contains the password.
pub fn verify_credentials(email: &str, password: &str) -> Option<UserProfile> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
        .map(DemoAccount::profile)
}

/// Simulated login round-trip: waits [`LOGIN_DELAY_MS`], then verifies.
///
/// Not cancellable; a caller that goes away simply discards the result.
pub async fn authenticate(email: &str, password: &str) -> Option<UserProfile> {
    tokio::time::sleep(Duration::from_millis(LOGIN_DELAY_MS)).await;
    verify_credentials(email, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_account_has_pro_plan() {
        let profile = verify_credentials("admin@sublynx.com", "password123").unwrap();
        assert_eq!(profile.plan, PlanId::Pro);
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.level, 10);
        assert_eq!(profile.points, 5000);
    }

    #[test]
    fn alex_account_has_free_plan() {
        let profile = verify_credentials("alex@example.com", "password123").unwrap();
        assert_eq!(profile.plan, PlanId::Free);
        assert_eq!(profile.name, "Alex");
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(verify_credentials("alex@example.com", "wrong").is_none());
    }

    #[test]
    fn email_match_is_case_sensitive() {
        assert!(verify_credentials("Alex@example.com", "password123").is_none());
        assert!(verify_credentials("ADMIN@SUBLYNX.COM", "password123").is_none());
    }

    #[test]
    fn unknown_email_is_rejected() {
        assert!(verify_credentials("nobody@example.com", "password123").is_none());
    }

    #[tokio::test]
    async fn authenticate_applies_the_artificial_delay() {
        let started = std::time::Instant::now();
        let profile = authenticate("admin@sublynx.com", "password123").await;
        assert!(profile.is_some());
        assert!(started.elapsed() >= Duration::from_millis(LOGIN_DELAY_MS));
    }

    #[test]
    fn session_record_serializes_flat() {
        let profile = verify_credentials("alex@example.com", "password123").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["email"], "alex@example.com");
        assert_eq!(json["plan"], "free");
        assert_eq!(json["role"], "user");
        // `avatar` is omitted when unset.
        assert!(json.get("avatar").is_none());
    }
}
