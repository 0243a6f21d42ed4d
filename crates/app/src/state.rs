//! Application state and the actions the shell dispatches into it.
//!
//! `AppState` is the composition root's single owner of everything
//! mutable: the session, one catalog surface per tab and the
//! gamification/invite stores. Views read projections; every mutation goes
//! through a method here so plan gates apply before any state change.

use std::sync::Arc;

use sublynx_core::catalog::{Catalog, CatalogEntry};
use sublynx_core::engagement::Metric;
use sublynx_core::error::CoreError;
use sublynx_core::events::{FeedEvent, MapEvent};
use sublynx_core::filter::FilterState;
use sublynx_core::gamification::{
    self, ChallengeBoard, Leaderboard, RedeemDenied, Reward,
};
use sublynx_core::invites::{EventDossier, InviteQueue};
use sublynx_core::marketplace::Listing;
use sublynx_core::plans::{self, Capability, PlanDenied, PlanId};
use sublynx_core::profile::{Achievement, EventPhoto, ProfileDraft};
use sublynx_core::sort::SortKey;
use sublynx_store::{SessionManager, SessionStore};

use crate::config::Config;
use crate::seed;

/// The five navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feed,
    Map,
    Profile,
    Marketplace,
    Rewards,
}

impl Tab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "feed" => Some(Tab::Feed),
            "map" | "mapa" => Some(Tab::Map),
            "profile" | "perfil" => Some(Tab::Profile),
            "marketplace" | "market" | "mercado" => Some(Tab::Marketplace),
            "rewards" | "recompensas" => Some(Tab::Rewards),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Map => "Mapa",
            Tab::Profile => "Perfil",
            Tab::Marketplace => "Mercado",
            Tab::Rewards => "Recompensas",
        }
    }
}

/// One browsing surface: a catalog plus its view state.
///
/// Each surface owns its catalog exclusively; no two tabs share a store.
#[derive(Debug, Clone)]
pub struct Surface<T> {
    pub catalog: Catalog<T>,
    pub filter: FilterState,
    pub sort: Option<SortKey>,
}

impl<T: CatalogEntry> Surface<T> {
    pub fn new(catalog: Catalog<T>) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            sort: None,
        }
    }

    /// The filtered/sorted projection the view renders.
    pub fn projection(&self) -> Vec<Arc<T>> {
        self.catalog.project(&self.filter, self.sort)
    }

    pub fn toggle(&mut self, id: &str, metric: Metric) {
        self.catalog.toggle(id, metric);
    }
}

/// Outcome of a plan-gated engagement attempt.
#[derive(Debug, PartialEq)]
pub enum Gated<T> {
    /// The gate passed and the action was applied.
    Allowed(T),
    /// Free plan: the flow routes through the invite-request system.
    NeedsInviteRequest,
    /// A paid plan missing the capability: surface an upgrade prompt.
    Upgrade(PlanDenied),
}

pub struct AppState {
    pub sessions: SessionManager,
    pub tab: Tab,
    pub feed: Surface<FeedEvent>,
    pub map: Surface<MapEvent>,
    pub marketplace: Surface<Listing>,
    pub challenges: ChallengeBoard,
    pub leaderboard: Leaderboard,
    pub rewards: Vec<Reward>,
    pub invites: InviteQueue,
    pub dossier: EventDossier,
    pub achievements: Vec<Achievement>,
    pub photos: Vec<EventPhoto>,
    pub profile: ProfileDraft,
    /// Feed event whose audio preview is playing, if any.
    pub playing_audio: Option<String>,
}

impl AppState {
    /// Seed every surface and restore the persisted session, if any.
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: SessionManager::restore(SessionStore::new(config.session_path())),
            tab: Tab::default(),
            feed: Surface::new(seed::feed()),
            map: Surface::new(seed::map_events()),
            marketplace: Surface::new(seed::marketplace()),
            challenges: seed::challenges(),
            leaderboard: seed::leaderboard(),
            rewards: seed::rewards(),
            invites: seed::invites(),
            dossier: seed::dossier(),
            achievements: seed::achievements(),
            photos: seed::photos(),
            profile: ProfileDraft::default(),
            playing_audio: None,
        }
    }

    /// The logged-in user's plan; `Free` when logged out.
    pub fn plan(&self) -> PlanId {
        self.sessions.user().map(|u| u.plan).unwrap_or(PlanId::Free)
    }

    /// The logged-in user's points balance; the demo default when absent.
    pub fn points(&self) -> u32 {
        self.sessions.user().map(|u| u.points).unwrap_or(1250)
    }

    // -----------------------------------------------------------------------
    // Feed actions
    // -----------------------------------------------------------------------

    /// Like/unlike a feed event. Ungated; unknown ids are a no-op.
    pub fn toggle_feed_like(&mut self, id: &str) {
        self.feed.toggle(id, Metric::Like);
    }

    /// Play/stop a feed event's audio preview. Only one preview plays at a
    /// time; playing another event switches to it.
    pub fn toggle_audio(&mut self, id: &str) {
        if self.playing_audio.as_deref() == Some(id) {
            self.playing_audio = None;
        } else {
            self.playing_audio = Some(id.to_string());
        }
    }

    /// Check in to a feed event.
    ///
    /// Free-plan users route through the invite-request system first; other
    /// plans need [`Capability::AcceptInvites`]. No state changes on a
    /// denied gate.
    pub fn toggle_feed_checkin(&mut self, id: &str) -> Gated<()> {
        let plan = self.plan();
        if plan == PlanId::Free {
            return Gated::NeedsInviteRequest;
        }
        if let Err(denied) = plans::require(plan, Capability::AcceptInvites) {
            return Gated::Upgrade(denied);
        }
        self.feed.toggle(id, Metric::CheckIn);
        Gated::Allowed(())
    }

    // -----------------------------------------------------------------------
    // Map actions
    // -----------------------------------------------------------------------

    /// Ask for an invite to a map event.
    ///
    /// The actual organizer round-trip is simulated; free users compose a
    /// request through the invite system instead.
    pub fn request_map_invite(&self, id: &str) -> Result<Gated<String>, CoreError> {
        let event = self
            .map
            .catalog
            .get(id)
            .ok_or(CoreError::NotFound {
                entity: "event",
                id: id.to_string(),
            })?
            .clone();

        let plan = self.plan();
        if plan == PlanId::Free {
            return Ok(Gated::NeedsInviteRequest);
        }
        if let Err(denied) = plans::require(plan, Capability::AcceptInvites) {
            return Ok(Gated::Upgrade(denied));
        }
        Ok(Gated::Allowed(event.name.clone()))
    }

    /// Toggle secret mode on the map surface.
    pub fn toggle_secret_mode(&mut self) -> bool {
        self.map.filter.reveal_hidden = !self.map.filter.reveal_hidden;
        self.map.filter.reveal_hidden
    }

    // -----------------------------------------------------------------------
    // Marketplace actions
    // -----------------------------------------------------------------------

    pub fn toggle_listing_like(&mut self, id: &str) {
        self.marketplace.toggle(id, Metric::Like);
    }

    /// Start the sell flow: gated on [`Capability::SellProducts`]. The flow
    /// itself is not implemented; a passing gate yields a notice.
    pub fn start_sell_flow(&self) -> Result<(), PlanDenied> {
        plans::require(self.plan(), Capability::SellProducts)
    }

    // -----------------------------------------------------------------------
    // Invite actions
    // -----------------------------------------------------------------------

    /// Compose an invite request as the current user.
    pub fn submit_invite_request(
        &mut self,
        event_id: &str,
        message: &str,
    ) -> Result<String, CoreError> {
        let user = self
            .sessions
            .user()
            .ok_or_else(|| CoreError::Unauthorized("Faça login primeiro".to_string()))?
            .clone();

        let event_name = self
            .map
            .catalog
            .get(event_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "Evento Solicitado".to_string());

        self.invites.submit(event_id, &event_name, &user, message)
    }

    /// Organizer decision on a request. The management view is only
    /// available to paid plans.
    pub fn decide_invite(&mut self, id: &str, approve: bool) -> Result<(), CoreError> {
        if !self.plan().is_paid() {
            return Err(CoreError::Forbidden(
                "Gerenciar solicitações requer um plano pago".to_string(),
            ));
        }
        if approve {
            self.invites.approve(id)
        } else {
            self.invites.reject(id)
        }
    }

    // -----------------------------------------------------------------------
    // Rewards actions
    // -----------------------------------------------------------------------

    /// Claim a completed challenge, returning the points earned.
    pub fn claim_challenge(&mut self, id: &str) -> Result<u32, CoreError> {
        self.challenges.claim(id)
    }

    /// Validate a reward redemption against the user's points.
    pub fn redeem_reward(&self, id: &str) -> Result<&Reward, CoreError> {
        let reward = self
            .rewards
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "reward",
                id: id.to_string(),
            })?;

        gamification::redeem_check(self.points(), reward).map_err(|denied| match denied {
            RedeemDenied::Unavailable => {
                CoreError::Conflict(format!("'{}' não está disponível", reward.name))
            }
            RedeemDenied::InsufficientPoints { missing } => CoreError::Validation(format!(
                "Faltam {missing} pontos para resgatar '{}'",
                reward.name
            )),
        })?;

        Ok(reward)
    }
}
