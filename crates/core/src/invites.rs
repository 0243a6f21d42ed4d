//! Invite requests for secret events.
//!
//! Guests ask an organizer for access to a secret event; the organizer
//! approves or rejects from the requests queue. Requesting is gated on the
//! requester's plan (see [`crate::plans`]); managing the queue is an
//! organizer surface available to paid plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::UserProfile;
use crate::error::CoreError;
use crate::types::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Approved,
    Rejected,
}

impl InviteStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            InviteStatus::Pending => "Pendente",
            InviteStatus::Approved => "Aprovado",
            InviteStatus::Rejected => "Rejeitado",
        }
    }
}

/// One guest's request for a secret-event invite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub id: EntryId,
    pub event_id: String,
    pub event_name: String,
    pub requester_name: String,
    /// Message to the organizer. Never empty.
    pub message: String,
    pub status: InviteStatus,
    pub submitted_at: DateTime<Utc>,
}

/// The organizer-side queue of invite requests, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteQueue {
    requests: Vec<InviteRequest>,
}

impl InviteQueue {
    pub fn new(requests: Vec<InviteRequest>) -> Self {
        Self { requests }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InviteRequest> {
        self.requests.iter()
    }

    pub fn get(&self, id: &str) -> Option<&InviteRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == InviteStatus::Pending)
            .count()
    }

    /// Submit a new request. The message to the organizer is mandatory.
    ///
    /// Returns the generated request id.
    pub fn submit(
        &mut self,
        event_id: &str,
        event_name: &str,
        requester: &UserProfile,
        message: &str,
    ) -> Result<String, CoreError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(CoreError::Validation(
                "Escreva uma mensagem para o organizador".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        self.requests.insert(
            0,
            InviteRequest {
                id: id.clone(),
                event_id: event_id.to_string(),
                event_name: event_name.to_string(),
                requester_name: requester.name.clone(),
                message: message.to_string(),
                status: InviteStatus::Pending,
                submitted_at: Utc::now(),
            },
        );
        Ok(id)
    }

    pub fn approve(&mut self, id: &str) -> Result<(), CoreError> {
        self.decide(id, InviteStatus::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Result<(), CoreError> {
        self.decide(id, InviteStatus::Rejected)
    }

    /// Decide a pending request. Decided requests are immutable.
    fn decide(&mut self, id: &str, status: InviteStatus) -> Result<(), CoreError> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "invite request",
                id: id.to_string(),
            })?;

        if request.status != InviteStatus::Pending {
            return Err(CoreError::Conflict(format!(
                "Invite request from {} was already {}",
                request.requester_name,
                request.status.display_name()
            )));
        }

        request.status = status;
        Ok(())
    }
}

/// The full detail sheet an approved guest sees for a secret event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDossier {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    /// Exact street address, revealed on approval.
    pub address: String,
    pub coordinates: String,
    /// Ticket price in whole reais.
    pub price: u32,
    pub available_tickets: u32,
    pub lineup: Vec<String>,
    pub amenities: Vec<String>,
    pub rules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_credentials;
    use assert_matches::assert_matches;

    fn alex() -> UserProfile {
        verify_credentials("alex@example.com", "password123").unwrap()
    }

    fn pending(id: &str) -> InviteRequest {
        InviteRequest {
            id: id.to_string(),
            event_id: "2".to_string(),
            event_name: "Sessão Bass Exclusiva".to_string(),
            requester_name: "Alex Silva".to_string(),
            message: "Sou fã de drum & bass há anos!".to_string(),
            status: InviteStatus::Pending,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn submit_prepends_a_pending_request() {
        let mut queue = InviteQueue::new(vec![pending("1")]);
        let id = queue
            .submit("4", "Dark Matter", &alex(), "  Respeito as regras.  ")
            .unwrap();

        let newest = queue.iter().next().unwrap();
        assert_eq!(newest.id, id);
        assert_eq!(newest.status, InviteStatus::Pending);
        assert_eq!(newest.requester_name, "Alex");
        // Message is trimmed.
        assert_eq!(newest.message, "Respeito as regras.");
        assert_eq!(queue.pending_count(), 2);
    }

    #[test]
    fn submit_requires_a_message() {
        let mut queue = InviteQueue::default();
        assert_matches!(
            queue.submit("4", "Dark Matter", &alex(), "   "),
            Err(CoreError::Validation(_))
        );
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn approve_and_reject_transition_pending_only() {
        let mut queue = InviteQueue::new(vec![pending("1"), pending("2")]);

        queue.approve("1").unwrap();
        assert_eq!(queue.get("1").unwrap().status, InviteStatus::Approved);

        queue.reject("2").unwrap();
        assert_eq!(queue.get("2").unwrap().status, InviteStatus::Rejected);

        // Decided requests cannot flip.
        assert_matches!(queue.reject("1"), Err(CoreError::Conflict(_)));
        assert_eq!(queue.get("1").unwrap().status, InviteStatus::Approved);
    }

    #[test]
    fn deciding_an_unknown_request_is_not_found() {
        let mut queue = InviteQueue::default();
        assert_matches!(
            queue.approve("999"),
            Err(CoreError::NotFound { entity: "invite request", .. })
        );
    }
}
