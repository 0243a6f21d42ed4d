//! The user profile tab.

use std::fmt::Write;

use sublynx_core::profile::{level_title, UserStats, AVATAR_SKINS};

use crate::state::AppState;

/// Demo activity counters; the product has no per-user history yet.
fn stats_for(state: &AppState) -> UserStats {
    let (level, points) = state
        .sessions
        .user()
        .map(|u| (u.level, u.points))
        .unwrap_or((3, 1250));
    UserStats {
        events_attended: 12,
        total_checkins: 89,
        friends_count: 156,
        likes_received: 234,
        level,
        points,
        next_level_points: 1500,
    }
}

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Perfil ===\n");

    let Some(user) = state.sessions.user() else {
        let _ = writeln!(out, "Faça login para ver seu perfil");
        return out;
    };

    let stats = stats_for(state);
    let _ = writeln!(
        out,
        "{} ({}) — Level {} · {}",
        user.name,
        user.email,
        stats.level,
        level_title(stats.level)
    );
    let _ = writeln!(
        out,
        "{} pontos · {}% para o próximo nível · Plano {}",
        stats.points,
        stats.level_progress_pct(),
        user.plan.as_str()
    );

    let skin = AVATAR_SKINS
        .iter()
        .find(|s| s.id == state.profile.avatar)
        .unwrap_or(&AVATAR_SKINS[0]);
    let _ = writeln!(out, "Avatar: {} ({})\n", skin.name, skin.id);

    let _ = writeln!(out, "\"{}\"", state.profile.bio);
    let _ = writeln!(
        out,
        "Preferências: {}\n",
        state.profile.music_preferences.join(", ")
    );

    let _ = writeln!(
        out,
        "{} eventos · {} check-ins · {} amigos · {} curtidas recebidas\n",
        stats.events_attended, stats.total_checkins, stats.friends_count, stats.likes_received
    );

    let _ = writeln!(out, "-- Conquistas --");
    for achievement in &state.achievements {
        let _ = writeln!(
            out,
            "{} {} ({}) — {} · {}",
            achievement.icon,
            achievement.name,
            achievement.rarity.display_name(),
            achievement.description,
            achievement.unlocked_at
        );
    }

    let _ = writeln!(out, "\n-- Fotos de Eventos --");
    for photo in &state.photos {
        let _ = writeln!(
            out,
            "{} ({}) — ♥ {}",
            photo.event_name, photo.date, photo.likes
        );
    }

    let _ = writeln!(
        out,
        "\nComandos: bio <texto> · avatar <id> · pref <gênero> · logout"
    );
    out
}
