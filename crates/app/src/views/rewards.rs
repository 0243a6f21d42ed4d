//! The rewards tab: challenges, leaderboard and the points shop.

use std::fmt::Write;

use sublynx_core::gamification::ChallengeKind;

use crate::state::AppState;

/// Fallback rank/weekly points for users outside the leaderboard snapshot.
const FALLBACK_RANK: u32 = 47;
const FALLBACK_WEEKLY_POINTS: u32 = 180;

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Sistema de Recompensas ===");
    let _ = writeln!(
        out,
        "Ganhe pontos, suba de nível e desbloqueie recompensas\n"
    );

    let user_name = state.sessions.user().map(|u| u.name.as_str()).unwrap_or("");
    let (rank, weekly) = state
        .leaderboard
        .entry_for(user_name)
        .map(|e| (e.rank, e.weekly_points))
        .unwrap_or((FALLBACK_RANK, FALLBACK_WEEKLY_POINTS));
    let _ = writeln!(
        out,
        "{} pontos · Rank #{rank} · +{weekly} esta semana\n",
        state.points()
    );

    // -- Challenges --
    let _ = writeln!(out, "-- Desafios --");
    for challenge in state.challenges.iter() {
        let kind = match challenge.kind {
            ChallengeKind::Daily => "diário",
            ChallengeKind::Weekly => "semanal",
            ChallengeKind::Monthly => "mensal",
        };
        let status = if challenge.completed {
            "Concluído!".to_string()
        } else if challenge.is_claimable() {
            format!("resgatável com 'claim {}'", challenge.id)
        } else {
            format!("{}%", challenge.progress_pct())
        };
        let _ = writeln!(
            out,
            "[{}] {} (+{} pontos, {kind}) — {}/{} · {status}",
            challenge.id,
            challenge.title,
            challenge.points,
            challenge.progress,
            challenge.max_progress
        );
        let _ = writeln!(out, "    {}", challenge.description);
    }

    // -- Leaderboard --
    let _ = writeln!(out, "\n-- Ranking --");
    for entry in state.leaderboard.top(10) {
        let marker = if entry.name == user_name { " ← você" } else { "" };
        let _ = writeln!(
            out,
            "#{} {} (Level {}) — {} pontos · +{} esta semana {}{marker}",
            entry.rank,
            entry.name,
            entry.level,
            entry.points,
            entry.weekly_points,
            entry.badges.join(" ")
        );
    }

    // -- Rewards shop --
    let _ = writeln!(out, "\n-- Loja de Recompensas --");
    for reward in &state.rewards {
        let status = if !reward.available {
            "indisponível"
        } else if state.points() >= reward.cost {
            "disponível"
        } else {
            "pontos insuficientes"
        };
        let _ = writeln!(
            out,
            "[{}] {} ({}) — {} pontos · {status}",
            reward.id,
            reward.name,
            reward.rarity.display_name(),
            reward.cost
        );
        let _ = writeln!(out, "    {}", reward.description);
    }

    let _ = writeln!(out, "\nComandos: claim <id> · redeem <id>");
    out
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
    fn renders_challenges_and_shop() {
        let rendered = render(&state());
        assert!(rendered.contains("Party Explorer"));
        assert!(rendered.contains("Secret Hunter"));
        assert!(rendered.contains("Avatar Holográfico"));
        assert!(rendered.contains("Badge Lenda SUBLINX"));
        assert!(rendered.contains("indisponível"));
    }

    #[test]
    fn logged_out_shows_fallback_rank_and_demo_points() {
        let rendered = render(&state());
        assert!(rendered.contains("1250 pontos · Rank #47 · +180 esta semana"));
    }

    #[test]
    fn claimable_challenge_advertises_the_claim_command() {
        let mut state = state();
        state.challenges.record_progress("1", 1);
        let rendered = render(&state);
        assert!(rendered.contains("resgatável com 'claim 1'"));
    }
}
