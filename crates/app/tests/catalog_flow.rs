//! Browsing-surface scenarios: filtering, sorting, engagement and plan
//! gates, exercised the way the shell drives them.

use sublynx_app::config::Config;
use sublynx_app::shell::{dispatch, Command, Outcome};
use sublynx_app::state::{AppState, Tab};
use sublynx_core::engagement::Metric;
use sublynx_core::filter::FilterState;
use sublynx_core::sort::SortKey;

fn config(dir: &tempfile::TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        session_file: "session.json".to_string(),
    }
}

async fn logged_in(dir: &tempfile::TempDir, email: &str) -> AppState {
    let mut state = AppState::new(&config(dir));
    match dispatch(
        &mut state,
        Command::Login {
            email: email.to_string(),
            password: "password123".to_string(),
        },
    )
    .await
    {
        Outcome::Continue(output) => assert!(output.contains("Bem-vindo"), "{output}"),
        Outcome::Exit => panic!("unexpected exit"),
    }
    state
}

async fn output(state: &mut AppState, command: Command) -> String {
    match dispatch(state, command).await {
        Outcome::Continue(output) => output,
        Outcome::Exit => panic!("unexpected exit"),
    }
}

#[tokio::test]
async fn bass_search_matches_the_tagged_event_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;

    for query in ["bass", "Bass", "BASS"] {
        state.feed.filter = FilterState {
            query: query.to_string(),
            ..FilterState::default()
        };
        let projection = state.feed.projection();
        assert_eq!(projection.len(), 1, "query {query:?}");
        assert_eq!(projection[0].name, "Sessão Bass Exclusiva");
    }
}

#[tokio::test]
async fn marketplace_price_sorts_follow_the_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;
    state.tab = Tab::Marketplace;

    output(&mut state, Command::Sort("price-asc".to_string())).await;
    let prices: Vec<u32> = state.marketplace.projection().iter().map(|i| i.price).collect();
    assert_eq!(prices, [120, 180, 350, 500]);

    output(&mut state, Command::Sort("price-desc".to_string())).await;
    let prices: Vec<u32> = state.marketplace.projection().iter().map(|i| i.price).collect();
    assert_eq!(prices, [500, 350, 180, 120]);

    // Store order is untouched by sorting.
    let ids: Vec<String> = state
        .marketplace
        .catalog
        .iter()
        .map(|i| i.id.clone())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[tokio::test]
async fn featured_sort_puts_highlights_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;
    state.marketplace.sort = Some(SortKey::Featured);

    let featured: Vec<bool> = state
        .marketplace
        .projection()
        .iter()
        .map(|i| i.featured)
        .collect();
    assert_eq!(featured, [true, true, false, false]);
}

#[tokio::test]
async fn likes_toggle_and_untoggle_through_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;

    output(&mut state, Command::Like("1".to_string())).await;
    let event = state.feed.catalog.get("1").unwrap();
    assert!(event.likes.active);
    assert_eq!(event.likes.count, 128);

    output(&mut state, Command::Like("1".to_string())).await;
    let event = state.feed.catalog.get("1").unwrap();
    assert!(!event.likes.active);
    assert_eq!(event.likes.count, 127);
}

#[tokio::test]
async fn liking_a_stale_id_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;

    let before = state.feed.catalog.clone();
    output(&mut state, Command::Like("999".to_string())).await;
    assert_eq!(before, state.feed.catalog);
}

#[tokio::test]
async fn free_plan_sell_shows_the_upgrade_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;
    state.tab = Tab::Marketplace;

    let prompt = output(&mut state, Command::Sell).await;
    assert!(prompt.contains("Upgrade Necessário"));
    assert!(prompt.contains("vender produtos no marketplace"));
    assert!(prompt.contains("Premium — R$ 29,90/mês"));
}

#[tokio::test]
async fn pro_plan_sell_reaches_the_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "admin@sublynx.com").await;

    let notice = output(&mut state, Command::Sell).await;
    assert!(notice.contains("em desenvolvimento"));
    assert!(!notice.contains("Upgrade Necessário"));
}

#[tokio::test]
async fn buy_and_chat_are_explicit_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;

    assert!(output(&mut state, Command::Buy("1".to_string()))
        .await
        .contains("em breve"));
    assert!(output(&mut state, Command::Chat("1".to_string()))
        .await
        .contains("em breve"));
    assert!(output(&mut state, Command::Trade("1".to_string()))
        .await
        .contains("em breve"));
}

#[tokio::test]
async fn secret_mode_round_trip_through_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = logged_in(&dir, "alex@example.com").await;
    state.tab = Tab::Map;

    assert_eq!(state.map.projection().len(), 2);

    let enabled = output(&mut state, Command::Secret).await;
    assert!(enabled.contains("Modo Secreto Ativo"));
    assert_eq!(state.map.projection().len(), 5);

    let disabled = output(&mut state, Command::Secret).await;
    assert!(disabled.contains("Modo Secreto Desativado"));
    assert_eq!(state.map.projection().len(), 2);
}

#[tokio::test]
async fn invite_lifecycle_from_request_to_decision() {
    // Alex (free) composes a request through the invite system.
    let guest_dir = tempfile::tempdir().unwrap();
    let mut guest = logged_in(&guest_dir, "alex@example.com").await;
    let sent = output(
        &mut guest,
        Command::Request {
            event_id: "2".to_string(),
            message: "Sou fã de drum & bass!".to_string(),
        },
    )
    .await;
    assert!(sent.contains("Solicitação de convite enviada"));
    let new_id = guest.invites.iter().next().unwrap().id.clone();

    // An organizer account approves it.
    let organizer_dir = tempfile::tempdir().unwrap();
    let mut organizer = logged_in(&organizer_dir, "admin@sublynx.com").await;
    organizer.invites = guest.invites.clone();
    let approved = output(&mut organizer, Command::Approve(new_id.clone())).await;
    assert!(approved.contains("Convite aprovado"));

    // A second decision on the same request is refused.
    let conflicted = output(&mut organizer, Command::Reject(new_id)).await;
    assert!(conflicted.contains("Conflict"));
}

#[tokio::test]
async fn watch_metric_is_not_toggleable_on_listings() {
    let dir = tempfile::tempdir().unwrap();
    let state = logged_in(&dir, "alex@example.com").await;

    let before = state.marketplace.catalog.clone();
    let after = before.toggled("1", Metric::Watch);
    assert_eq!(before, after);
}
