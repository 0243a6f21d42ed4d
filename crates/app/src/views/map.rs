//! The event map tab.

use std::fmt::Write;

use sublynx_core::filter::CATEGORY_ALL_PT;

use crate::state::AppState;

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Mapa de Eventos ===");
    let _ = writeln!(out, "Descubra eventos próximos a você\n");

    let filter = &state.map.filter;
    let secret_label = if filter.reveal_hidden {
        "Modo Secreto Ativo"
    } else {
        "Modo Secreto Desativado"
    };
    let _ = writeln!(
        out,
        "{secret_label} · Gênero: {} · Tipo: {} · Distância: {}",
        filter.category.as_deref().unwrap_or(CATEGORY_ALL_PT),
        filter.kind.as_deref().unwrap_or(CATEGORY_ALL_PT),
        filter
            .max_distance_km
            .map(|d| format!("{d:.0}km"))
            .unwrap_or_else(|| "sem limite".to_string()),
    );
    let _ = writeln!(out);

    let projection = state.map.projection();
    for event in &projection {
        let marker = if event.secret { "◉ secreto" } else { "♪ público" };
        let _ = writeln!(
            out,
            "[{}] {} ({marker}) — {} · {}",
            event.id, event.name, event.genre, event.kind
        );
        let _ = writeln!(
            out,
            "    posição ({:.0}%, {:.0}%) · {:.1}km · hoje às {} · {} confirmados",
            event.x, event.y, event.distance_km, event.time, event.attendees
        );
    }
    if projection.is_empty() {
        let _ = writeln!(out, "Nenhum evento dentro dos filtros");
    }

    // Quick stats over the visible projection.
    let public = projection.iter().filter(|e| !e.secret).count();
    let secret = projection.iter().filter(|e| e.secret).count();
    let attendees: u32 = projection.iter().map(|e| e.attendees).sum();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} eventos · {public} públicos · {secret} secretos · {attendees} pessoas",
        projection.len()
    );
    let _ = writeln!(
        out,
        "Comandos: secret · genre <nome> · type <nome> · distance <km> · invite <id>"
    );
    out
}
