//! The invite-request system: organizer queue and guest view.

use std::fmt::Write;

use chrono::Utc;
use sublynx_core::invites::InviteRequest;

use crate::state::AppState;
use crate::views::format_reais;

/// "há 2 horas"-style age label for a request.
fn age_label(request: &InviteRequest) -> String {
    let elapsed = Utc::now() - request.submitted_at;
    if elapsed.num_minutes() < 1 {
        "agora".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("há {} min", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("há {} horas", elapsed.num_hours())
    } else {
        format!("há {} dias", elapsed.num_days())
    }
}

pub fn render(state: &AppState) -> String {
    if state.plan().is_paid() {
        organizer_view(state)
    } else {
        guest_view(state)
    }
}

/// Paid plans manage the requests for their events.
fn organizer_view(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Solicitações de Convite ===");
    let _ = writeln!(out, "Gerencie as solicitações para seus eventos\n");

    for request in state.invites.iter() {
        let _ = writeln!(
            out,
            "[{}] {} — {} ({}, {})",
            request.id,
            request.requester_name,
            request.event_name,
            request.status.display_name(),
            age_label(request)
        );
        let _ = writeln!(out, "    \"{}\"", request.message);
    }
    if state.invites.iter().count() == 0 {
        let _ = writeln!(out, "Nenhuma solicitação no momento");
    }

    let _ = writeln!(
        out,
        "\n{} pendentes · Comandos: approve <id> · reject <id>",
        state.invites.pending_count()
    );
    out
}

/// Free plans see the secret-event dossier and compose a request.
fn guest_view(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Sistema de Convites ===\n");

    let dossier = &state.dossier;
    let _ = writeln!(out, "{} — {}", dossier.name, dossier.description);
    let _ = writeln!(out, "{}\n", dossier.full_description);
    let _ = writeln!(
        out,
        "Ingresso: {} · {} disponíveis",
        format_reais(dossier.price),
        dossier.available_tickets
    );
    let _ = writeln!(out, "Lineup: {}", dossier.lineup.join(", "));
    let _ = writeln!(out, "Estrutura: {}", dossier.amenities.join(", "));
    let _ = writeln!(out, "Regras: {}", dossier.rules.join(" · "));

    let _ = writeln!(
        out,
        "\nComandos: request <evento-id> <mensagem> · buyticket (em breve)"
    );
    out
}
