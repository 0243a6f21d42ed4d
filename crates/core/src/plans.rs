//! Plan tiers and capability gating.
//!
//! The plan table is static and read-only: three tiers, each with a price,
//! display features and a closed set of capability flags and quotas.
//! Capability names are a closed enum, so an unknown capability is a
//! compile error rather than a silent `false`; an unknown *plan id* (e.g.
//! from a hand-edited session file) falls back to the most restrictive
//! tier.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// The closed set of plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Free,
    Premium,
    Pro,
}

impl PlanId {
    /// Parse a stored plan id. Unknown values resolve to [`PlanId::Free`],
    /// the most restrictive tier, rather than failing.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "premium" => PlanId::Premium,
            "pro" => PlanId::Pro,
            _ => PlanId::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanId::Free => "free",
            PlanId::Premium => "premium",
            PlanId::Pro => "pro",
        }
    }

    pub fn is_paid(self) -> bool {
        !matches!(self, PlanId::Free)
    }
}

/// Actions gated by plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SellTickets,
    SendInvites,
    AcceptInvites,
    SellProducts,
}

impl Capability {
    /// Human-readable description used in upgrade prompts.
    pub fn describe(self) -> &'static str {
        match self {
            Capability::SellTickets => "vender ingressos para seus eventos",
            Capability::SendInvites => "enviar convites",
            Capability::AcceptInvites => "aceitar convites para eventos secretos",
            Capability::SellProducts => "vender produtos no marketplace",
        }
    }
}

/// Numeric limits gated by plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaKind {
    EventsPerMonth,
    InvitesPerEvent,
    MarketplaceListings,
}

/// A plan's numeric allowance for one [`QuotaKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    /// Whether `used` more of the resource would still be within quota.
    pub fn allows(self, used: u32) -> bool {
        match self {
            Quota::Limited(max) => used < max,
            Quota::Unlimited => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Plan table
// ---------------------------------------------------------------------------

/// One row of the static plan table.
#[derive(Debug)]
pub struct Plan {
    pub id: PlanId,
    /// Display name.
    pub name: &'static str,
    /// Monthly price in centavos.
    pub price_cents: u32,
    /// Display-only feature descriptions.
    pub features: &'static [&'static str],
    events_per_month: Quota,
    invites_per_event: Quota,
    marketplace_listings: Quota,
    can_sell_tickets: bool,
    can_send_invites: bool,
    can_accept_invites: bool,
    can_sell_products: bool,
}

const FREE: Plan = Plan {
    id: PlanId::Free,
    name: "Gratuito",
    price_cents: 0,
    features: &[
        "Visualizar eventos públicos",
        "Participar do feed",
        "Comprar produtos no marketplace",
        "Perfil básico",
    ],
    events_per_month: Quota::Limited(0),
    invites_per_event: Quota::Limited(0),
    marketplace_listings: Quota::Limited(0),
    can_sell_tickets: false,
    can_send_invites: false,
    can_accept_invites: false,
    can_sell_products: false,
};

const PREMIUM: Plan = Plan {
    id: PlanId::Premium,
    name: "Premium",
    price_cents: 2990,
    features: &[
        "Publicar até 5 eventos por mês",
        "Enviar até 50 convites por evento",
        "Vender até 10 produtos no marketplace",
        "Aceitar convites para eventos secretos",
        "Vender ingressos para seus eventos",
        "Perfil verificado",
    ],
    events_per_month: Quota::Limited(5),
    invites_per_event: Quota::Limited(50),
    marketplace_listings: Quota::Limited(10),
    can_sell_tickets: true,
    can_send_invites: true,
    can_accept_invites: true,
    can_sell_products: true,
};

const PRO: Plan = Plan {
    id: PlanId::Pro,
    name: "Pro",
    price_cents: 5990,
    features: &[
        "Eventos ilimitados",
        "Convites ilimitados",
        "Marketplace ilimitado",
        "Análises avançadas",
        "Suporte prioritário",
        "Badge exclusivo",
    ],
    events_per_month: Quota::Unlimited,
    invites_per_event: Quota::Unlimited,
    marketplace_listings: Quota::Unlimited,
    can_sell_tickets: true,
    can_send_invites: true,
    can_accept_invites: true,
    can_sell_products: true,
};

/// All plans, cheapest first.
pub const PLANS: &[Plan] = &[FREE, PREMIUM, PRO];

/// The table row for `id`.
pub fn plan(id: PlanId) -> &'static Plan {
    match id {
        PlanId::Free => &FREE,
        PlanId::Premium => &PREMIUM,
        PlanId::Pro => &PRO,
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Whether `plan_id` grants `capability`. Total over both enums.
pub fn can_perform(plan_id: PlanId, capability: Capability) -> bool {
    let row = plan(plan_id);
    match capability {
        Capability::SellTickets => row.can_sell_tickets,
        Capability::SendInvites => row.can_send_invites,
        Capability::AcceptInvites => row.can_accept_invites,
        Capability::SellProducts => row.can_sell_products,
    }
}

/// The numeric allowance `plan_id` has for `kind`.
pub fn quota(plan_id: PlanId, kind: QuotaKind) -> Quota {
    let row = plan(plan_id);
    match kind {
        QuotaKind::EventsPerMonth => row.events_per_month,
        QuotaKind::InvitesPerEvent => row.invites_per_event,
        QuotaKind::MarketplaceListings => row.marketplace_listings,
    }
}

/// Denial returned by [`require`], carrying what the upgrade prompt needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Plan '{}' cannot {}", .plan.as_str(), .capability.describe())]
pub struct PlanDenied {
    pub plan: PlanId,
    pub capability: Capability,
}

/// Gate a mutating action on `capability`.
///
/// Callers must surface the denial as an upgrade prompt and apply no state
/// change when it fires.
pub fn require(plan_id: PlanId, capability: Capability) -> Result<(), PlanDenied> {
    if can_perform(plan_id, capability) {
        Ok(())
    } else {
        Err(PlanDenied {
            plan: plan_id,
            capability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_cannot_sell_products() {
        assert!(!can_perform(PlanId::Free, Capability::SellProducts));
    }

    #[test]
    fn premium_can_sell_products() {
        assert!(can_perform(PlanId::Premium, Capability::SellProducts));
    }

    #[test]
    fn unknown_plan_falls_back_to_free() {
        let plan_id = PlanId::parse("unknown-plan-id");
        assert_eq!(plan_id, PlanId::Free);
        for capability in [
            Capability::SellTickets,
            Capability::SendInvites,
            Capability::AcceptInvites,
            Capability::SellProducts,
        ] {
            assert!(!can_perform(plan_id, capability));
        }
    }

    #[test]
    fn paid_plans_grant_every_capability() {
        for plan_id in [PlanId::Premium, PlanId::Pro] {
            for capability in [
                Capability::SellTickets,
                Capability::SendInvites,
                Capability::AcceptInvites,
                Capability::SellProducts,
            ] {
                assert!(can_perform(plan_id, capability));
            }
        }
    }

    #[test]
    fn quotas_match_the_table() {
        assert_eq!(
            quota(PlanId::Free, QuotaKind::MarketplaceListings),
            Quota::Limited(0)
        );
        assert_eq!(
            quota(PlanId::Premium, QuotaKind::InvitesPerEvent),
            Quota::Limited(50)
        );
        assert_eq!(quota(PlanId::Pro, QuotaKind::EventsPerMonth), Quota::Unlimited);
    }

    #[test]
    fn quota_allows_below_the_limit_only() {
        assert!(Quota::Limited(5).allows(4));
        assert!(!Quota::Limited(5).allows(5));
        assert!(!Quota::Limited(0).allows(0));
        assert!(Quota::Unlimited.allows(u32::MAX));
    }

    #[test]
    fn require_names_the_denied_capability() {
        let denied = require(PlanId::Free, Capability::AcceptInvites).unwrap_err();
        assert_eq!(denied.plan, PlanId::Free);
        assert_eq!(denied.capability, Capability::AcceptInvites);
        assert!(denied.to_string().contains("aceitar convites"));

        assert!(require(PlanId::Pro, Capability::AcceptInvites).is_ok());
    }

    #[test]
    fn plan_ids_round_trip_through_serde() {
        let json = serde_json::to_string(&PlanId::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
        let back: PlanId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlanId::Premium);
    }

    #[test]
    fn plans_are_ordered_cheapest_first() {
        let prices: Vec<u32> = PLANS.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, [0, 2990, 5990]);
    }
}
