//! The personalized feed tab.

use std::fmt::Write;

use crate::state::AppState;

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Feed Personalizado ===");
    let _ = writeln!(out, "Eventos selecionados para você\n");

    let projection = state.feed.projection();
    if projection.is_empty() {
        let _ = writeln!(out, "Nenhum evento encontrado");
        return out;
    }

    for event in &projection {
        let verified = if event.organizer.verified { " ✓" } else { "" };
        let _ = writeln!(
            out,
            "[{}] {} — {}{}",
            event.id, event.name, event.organizer.name, verified
        );
        let _ = writeln!(out, "    {}", event.description);
        let _ = writeln!(
            out,
            "    {} · {} · {} às {}",
            event.genre, event.kind, event.date_label, event.time
        );
        let _ = writeln!(
            out,
            "    {} · {:.1}km",
            event.venue.name, event.venue.distance_km
        );
        let playing = if state.playing_audio.as_deref() == Some(event.id.as_str()) {
            " ▶ tocando"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "    ♪ {} ({}){playing}",
            event.audio.title, event.audio.duration
        );
        if !event.tags.is_empty() {
            let _ = writeln!(out, "    tags: {}", event.tags.join(", "));
        }

        let like_marker = if event.likes.active { "♥" } else { "♡" };
        let checkin_label = if event.checkins.active {
            "Check-in Feito"
        } else {
            "Solicitar Convite"
        };
        let _ = writeln!(
            out,
            "    {like_marker} {}  💬 {}  check-ins: {}  [{checkin_label}]",
            event.likes.count, event.comments, event.checkins.count
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Comandos: like <id> · checkin <id> · search <texto>");
    out
}

/// Placeholder for the unimplemented pagination.
pub fn load_more_notice() -> &'static str {
    "Carregando mais eventos... (em breve)"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        AppState::new(&Config {
            data_dir: dir.path().to_path_buf(),
            session_file: "session.json".to_string(),
        })
    }

    #[test]
    fn renders_every_seeded_event() {
        let rendered = render(&state());
        assert!(rendered.contains("Experiência Techno Noturna"));
        assert!(rendered.contains("Sessão Bass Exclusiva"));
        assert!(rendered.contains("Cyber Pulse Festival"));
        assert!(rendered.contains("TechnoCollective"));
    }

    #[test]
    fn search_narrows_the_rendered_feed() {
        let mut state = state();
        state.feed.filter.query = "bass".to_string();
        let rendered = render(&state);
        assert!(rendered.contains("Sessão Bass Exclusiva"));
        assert!(!rendered.contains("Cyber Pulse Festival"));
    }

    #[test]
    fn empty_projection_has_a_friendly_message() {
        let mut state = state();
        state.feed.filter.query = "zzz-no-match".to_string();
        assert!(render(&state).contains("Nenhum evento encontrado"));
    }
}
