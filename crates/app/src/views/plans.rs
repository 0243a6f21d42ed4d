//! Plan table rendering and the upgrade prompt.

use std::fmt::Write;

use sublynx_core::plans::{plan, PlanDenied, PlanId, PLANS};

use crate::views::format_cents;

/// The prompt shown when a plan gate denies an action.
///
/// Names the denied capability and lists the paid tiers; the actual
/// payment flow is not implemented.
pub fn upgrade_prompt(denied: &PlanDenied) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Upgrade Necessário ===");
    let _ = writeln!(
        out,
        "Para {}, você precisa de um plano premium.\n",
        denied.capability.describe()
    );

    for row in PLANS.iter().filter(|p| p.id != PlanId::Free) {
        let _ = writeln!(
            out,
            "{} — {}/mês{}",
            row.name,
            format_cents(row.price_cents),
            if row.id == PlanId::Pro { " (Mais Popular)" } else { "" }
        );
        for feature in row.features {
            let _ = writeln!(out, "  ✓ {feature}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Todos os planos incluem 7 dias de teste gratuito.");
    let _ = writeln!(
        out,
        "Use 'upgrade <premium|pro>' (em breve) ou continue com o plano {}.",
        plan(denied.plan).name
    );
    out
}

/// The read-only plan comparison shown by the `plans` command.
pub fn table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Planos ===\n");
    for row in PLANS {
        let _ = writeln!(out, "{} — {}/mês", row.name, format_cents(row.price_cents));
        for feature in row.features {
            let _ = writeln!(out, "  ✓ {feature}");
        }
        let _ = writeln!(out);
    }
    out
}

/// Placeholder for the unimplemented payment flow.
pub fn upgrade_notice(target: PlanId) -> String {
    format!(
        "Upgrade para {} em breve! Sistema de pagamento será implementado.",
        plan(target).name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sublynx_core::plans::{require, Capability};

    #[test]
    fn prompt_names_the_denied_capability() {
        let denied = require(PlanId::Free, Capability::SellProducts).unwrap_err();
        let prompt = upgrade_prompt(&denied);
        assert!(prompt.contains("vender produtos no marketplace"));
        assert!(prompt.contains("Premium — R$ 29,90/mês"));
        assert!(prompt.contains("Pro — R$ 59,90/mês (Mais Popular)"));
        assert!(prompt.contains("7 dias de teste gratuito"));
    }

    #[test]
    fn table_lists_all_three_plans() {
        let table = table();
        assert!(table.contains("Gratuito — R$ 0,00/mês"));
        assert!(table.contains("Premium"));
        assert!(table.contains("Pro"));
    }

    #[test]
    fn upgrade_notice_never_claims_success() {
        let notice = upgrade_notice(PlanId::Premium);
        assert!(notice.contains("em breve"));
    }
}
