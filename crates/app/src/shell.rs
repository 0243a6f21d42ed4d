//! Line-oriented command shell.
//!
//! Mirrors the original navigation: while logged out only the welcome
//! screen is reachable; once logged in the five tabs plus the invite
//! system respond to commands. Every unimplemented product action (buy,
//! chat, trade, sell, payment, social login) surfaces an explicit "em
//! breve" notice instead of pretending to succeed.

use std::io::{self, BufRead, Write};

use sublynx_core::error::CoreError;
use sublynx_core::filter::parse_selection;
use sublynx_core::marketplace::Category;
use sublynx_core::sort::SortKey;
use sublynx_store::SessionError;

use crate::state::{AppState, Gated, Tab};
use crate::views;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Login { email: String, password: String },
    Logout,
    Tab(Tab),
    /// Open the invite-request system (modal in the original UI).
    Invites,
    Search(String),
    Category(String),
    Genre(String),
    Kind(String),
    Distance(String),
    Sort(String),
    Secret,
    Like(String),
    Checkin(String),
    Play(String),
    Invite(String),
    Request { event_id: String, message: String },
    Approve(String),
    Reject(String),
    Claim(String),
    Redeem(String),
    Sell,
    Buy(String),
    Chat(String),
    Trade(String),
    BuyTicket,
    Plans,
    Upgrade(String),
    /// Social login providers are not wired up yet.
    Social(String),
    /// "Load more" pagination placeholder.
    More,
    Bio(String),
    Avatar(String),
    Pref(String),
    Unknown(String),
}

impl Command {
    /// Parse one input line. `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let arg = || rest.to_string();
        Some(match verb {
            "help" | "?" => Command::Help,
            "quit" | "exit" | "sair" => Command::Quit,
            "login" => match rest.split_once(char::is_whitespace) {
                Some((email, password)) => Command::Login {
                    email: email.to_string(),
                    password: password.trim().to_string(),
                },
                None => Command::Unknown("uso: login <email> <senha>".to_string()),
            },
            "logout" => Command::Logout,
            "tab" => match Tab::parse(rest) {
                Some(tab) => Command::Tab(tab),
                None => Command::Unknown(format!("aba desconhecida '{rest}'")),
            },
            "invites" | "convites" => Command::Invites,
            "search" | "buscar" => Command::Search(arg()),
            "category" | "categoria" => Command::Category(arg()),
            "genre" | "genero" => Command::Genre(arg()),
            "type" | "tipo" => Command::Kind(arg()),
            "distance" | "distancia" => Command::Distance(arg()),
            "sort" | "ordenar" => Command::Sort(arg()),
            "secret" | "secreto" => Command::Secret,
            "like" | "curtir" => Command::Like(arg()),
            "checkin" => Command::Checkin(arg()),
            "play" | "tocar" => Command::Play(arg()),
            "invite" | "convite" => Command::Invite(arg()),
            "request" | "solicitar" => match rest.split_once(char::is_whitespace) {
                Some((event_id, message)) => Command::Request {
                    event_id: event_id.to_string(),
                    message: message.trim().to_string(),
                },
                None => Command::Unknown("uso: request <evento-id> <mensagem>".to_string()),
            },
            "approve" | "aprovar" => Command::Approve(arg()),
            "reject" | "rejeitar" => Command::Reject(arg()),
            "claim" | "resgatar" => Command::Claim(arg()),
            "redeem" => Command::Redeem(arg()),
            "sell" | "vender" => Command::Sell,
            "buy" | "comprar" => Command::Buy(arg()),
            "chat" => Command::Chat(arg()),
            "trade" | "trocar" => Command::Trade(arg()),
            "buyticket" => Command::BuyTicket,
            "plans" | "planos" => Command::Plans,
            "upgrade" => Command::Upgrade(arg()),
            "social" => Command::Social(arg()),
            "more" | "mais" => Command::More,
            "bio" => Command::Bio(arg()),
            "avatar" => Command::Avatar(arg()),
            "pref" => Command::Pref(arg()),
            other => Command::Unknown(format!("comando desconhecido '{other}'")),
        })
    }
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Continue(String),
    Exit,
}

/// The view for the current tab (welcome screen while logged out).
pub fn render_current(state: &AppState) -> String {
    if state.sessions.user().is_none() {
        return views::welcome::render();
    }
    match state.tab {
        Tab::Feed => views::feed::render(state),
        Tab::Map => views::map::render(state),
        Tab::Profile => views::profile::render(state),
        Tab::Marketplace => views::marketplace::render(state),
        Tab::Rewards => views::rewards::render(state),
    }
}

fn help_text() -> String {
    [
        "Comandos:",
        "  login <email> <senha> · logout · quit",
        "  tab <feed|map|profile|marketplace|rewards> · invites · plans",
        "  search <texto> · category <id> · genre <nome> · type <nome> · distance <km>",
        "  sort <featured|recent|popular|price-asc|price-desc|none> · secret",
        "  like <id> · checkin <id> · invite <id> · request <evento-id> <mensagem>",
        "  approve <id> · reject <id> · claim <id> · redeem <id>",
        "  sell · buy <id> · chat <id> · trade <id> · buyticket · upgrade <plano>",
        "  bio <texto> · avatar <id> · pref <gênero>",
    ]
    .join("\n")
}

fn core_error_message(err: &CoreError) -> String {
    err.to_string()
}

/// Apply one command to the state and produce the text to print.
pub async fn dispatch(state: &mut AppState, command: Command) -> Outcome {
    use Outcome::Continue;

    // While logged out everything routes to the welcome screen, exactly
    // like the original app renders nothing but it.
    if state.sessions.user().is_none() {
        match &command {
            Command::Help => return Continue(help_text()),
            Command::Quit => return Outcome::Exit,
            Command::Plans => return Continue(views::plans::table()),
            Command::Social(provider) => {
                return Continue(views::welcome::social_login_notice(provider))
            }
            Command::Login { .. } => {}
            _ => return Continue(views::welcome::render()),
        }
    }

    match command {
        Command::Help => Continue(help_text()),
        Command::Quit => Outcome::Exit,

        Command::Login { email, password } => match state.sessions.login(&email, &password).await {
            Ok(true) => {
                let name = state
                    .sessions
                    .user()
                    .map(|u| u.name.clone())
                    .unwrap_or_default();
                Continue(format!("Bem-vindo, {name}!\n\n{}", render_current(state)))
            }
            Ok(false) => Continue(views::welcome::login_failed()),
            Err(SessionError::State(err)) => Continue(core_error_message(&err)),
            Err(SessionError::Store(err)) => Continue(format!("Erro ao salvar a sessão: {err}")),
        },
        Command::Logout => match state.sessions.logout() {
            Ok(()) => Continue(format!("Até logo!\n\n{}", views::welcome::render())),
            Err(err) => Continue(format!("Erro ao encerrar a sessão: {err}")),
        },

        Command::Tab(tab) => {
            state.tab = tab;
            Continue(render_current(state))
        }
        Command::Invites => Continue(views::invites::render(state)),
        Command::Plans => Continue(views::plans::table()),

        Command::Search(query) => {
            match state.tab {
                Tab::Feed => state.feed.filter.query = query,
                Tab::Map => state.map.filter.query = query,
                Tab::Marketplace => state.marketplace.filter.query = query,
                _ => {
                    return Continue(
                        "Busca disponível nas abas feed, map e marketplace".to_string(),
                    )
                }
            }
            Continue(render_current(state))
        }
        Command::Category(raw) => {
            let selection = parse_selection(&raw);
            if let Some(raw_category) = &selection {
                if Category::parse(raw_category).is_none() {
                    return Continue(format!("Categoria desconhecida '{raw_category}'"));
                }
            }
            state.marketplace.filter.category = selection
                .as_deref()
                .and_then(Category::parse)
                .map(|c| c.as_str().to_string());
            Continue(views::marketplace::render(state))
        }
        Command::Genre(raw) => {
            state.map.filter.category = parse_selection(&raw);
            Continue(views::map::render(state))
        }
        Command::Kind(raw) => {
            state.map.filter.kind = parse_selection(&raw);
            Continue(views::map::render(state))
        }
        Command::Distance(raw) => match raw.parse::<f64>() {
            Ok(km) if km > 0.0 => {
                state.map.filter.max_distance_km = Some(km);
                Continue(views::map::render(state))
            }
            _ => Continue("uso: distance <km>".to_string()),
        },
        Command::Sort(raw) => {
            if raw == "none" || raw == "nenhuma" {
                state.marketplace.sort = None;
                return Continue(views::marketplace::render(state));
            }
            match SortKey::parse(&raw) {
                Some(key) => {
                    state.marketplace.sort = Some(key);
                    Continue(views::marketplace::render(state))
                }
                None => Continue(format!("Ordenação desconhecida '{raw}'")),
            }
        }
        Command::Secret => {
            let enabled = state.toggle_secret_mode();
            let label = if enabled {
                "Modo Secreto Ativo"
            } else {
                "Modo Secreto Desativado"
            };
            Continue(format!("{label}\n\n{}", views::map::render(state)))
        }

        Command::Like(id) => {
            match state.tab {
                Tab::Marketplace => state.toggle_listing_like(&id),
                Tab::Feed => state.toggle_feed_like(&id),
                _ => return Continue("Curtidas disponíveis no feed e no marketplace".to_string()),
            }
            Continue(render_current(state))
        }
        Command::Play(id) => {
            let Some(event) = state.feed.catalog.get(&id).cloned() else {
                return Continue(format!("Evento '{id}' não encontrado"));
            };
            state.toggle_audio(&id);
            if state.playing_audio.is_some() {
                Continue(format!("▶ {} ({})", event.audio.title, event.audio.duration))
            } else {
                Continue("Reprodução parada".to_string())
            }
        }
        Command::Checkin(id) => match state.toggle_feed_checkin(&id) {
            Gated::Allowed(()) => Continue(render_current(state)),
            Gated::NeedsInviteRequest => Continue(views::invites::render(state)),
            Gated::Upgrade(denied) => Continue(views::plans::upgrade_prompt(&denied)),
        },
        Command::Invite(id) => match state.request_map_invite(&id) {
            Ok(Gated::Allowed(event_name)) => Continue(format!(
                "Solicitação de convite para '{event_name}' enviada! \
                 Aguarde aprovação do organizador."
            )),
            Ok(Gated::NeedsInviteRequest) => Continue(views::invites::render(state)),
            Ok(Gated::Upgrade(denied)) => Continue(views::plans::upgrade_prompt(&denied)),
            Err(err) => Continue(core_error_message(&err)),
        },
        Command::Request { event_id, message } => {
            match state.submit_invite_request(&event_id, &message) {
                Ok(_) => Continue(
                    "Solicitação de convite enviada! Aguarde a aprovação do organizador."
                        .to_string(),
                ),
                Err(err) => Continue(core_error_message(&err)),
            }
        }
        Command::Approve(id) => match state.decide_invite(&id, true) {
            Ok(()) => Continue(format!(
                "Convite aprovado! O solicitante foi notificado.\n\n{}",
                views::invites::render(state)
            )),
            Err(err) => Continue(core_error_message(&err)),
        },
        Command::Reject(id) => match state.decide_invite(&id, false) {
            Ok(()) => Continue(format!(
                "Convite rejeitado.\n\n{}",
                views::invites::render(state)
            )),
            Err(err) => Continue(core_error_message(&err)),
        },

        Command::Claim(id) => match state.claim_challenge(&id) {
            Ok(points) => Continue(format!(
                "Desafio concluído! +{points} pontos\n\n{}",
                views::rewards::render(state)
            )),
            Err(err) => Continue(core_error_message(&err)),
        },
        Command::Redeem(id) => match state.redeem_reward(&id) {
            Ok(reward) => Continue(format!(
                "Resgate de '{}' em breve! Sistema de compra em desenvolvimento.",
                reward.name
            )),
            Err(err) => Continue(core_error_message(&err)),
        },

        Command::Sell => match state.start_sell_flow() {
            Ok(()) => Continue("Funcionalidade de venda em desenvolvimento!".to_string()),
            Err(denied) => Continue(views::plans::upgrade_prompt(&denied)),
        },
        Command::Buy(_) => Continue("Compra em breve!".to_string()),
        Command::Chat(_) => Continue("Chat com vendedor em breve!".to_string()),
        Command::Trade(_) => Continue("Sistema de troca em breve!".to_string()),
        Command::BuyTicket => Continue(format!(
            "Pagamento de {} em breve! Nenhuma cobrança foi feita.",
            views::format_reais(state.dossier.price)
        )),
        Command::Social(provider) => Continue(views::welcome::social_login_notice(&provider)),
        Command::More => Continue(match state.tab {
            Tab::Marketplace => "Carregando mais itens... (em breve)".to_string(),
            _ => views::feed::load_more_notice().to_string(),
        }),
        Command::Upgrade(raw) => match raw.as_str() {
            "premium" => Continue(views::plans::upgrade_notice(
                sublynx_core::plans::PlanId::Premium,
            )),
            "pro" => Continue(views::plans::upgrade_notice(sublynx_core::plans::PlanId::Pro)),
            _ => Continue("uso: upgrade <premium|pro>".to_string()),
        },

        Command::Bio(text) => match state.profile.set_bio(&text) {
            Ok(()) => Continue(views::profile::render(state)),
            Err(err) => Continue(core_error_message(&err)),
        },
        Command::Avatar(id) => match state.profile.select_avatar(&id) {
            Ok(()) => Continue(views::profile::render(state)),
            Err(err) => Continue(core_error_message(&err)),
        },
        Command::Pref(genre) => {
            if genre.is_empty() {
                return Continue("uso: pref <gênero>".to_string());
            }
            state.profile.toggle_preference(&genre);
            Continue(views::profile::render(state))
        }

        Command::Unknown(message) => Continue(format!("{message} — digite 'help'")),
    }
}

/// Blocking REPL over stdin. Returns on `quit` or end of input.
pub async fn run(state: &mut AppState) -> anyhow::Result<()> {
    println!("{}", render_current(state));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("sublynx> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = Command::parse(&line?) else {
            continue;
        };

        match dispatch(state, command).await {
            Outcome::Continue(output) => println!("{output}\n"),
            Outcome::Exit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_commands() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("  "), None);
        assert_eq!(
            Command::parse("login alex@example.com password123"),
            Some(Command::Login {
                email: "alex@example.com".to_string(),
                password: "password123".to_string(),
            })
        );
        assert_eq!(Command::parse("tab map"), Some(Command::Tab(Tab::Map)));
        assert_eq!(
            Command::parse("search drum & bass"),
            Some(Command::Search("drum & bass".to_string()))
        );
        assert_eq!(
            Command::parse("request 2 Quero muito ir!"),
            Some(Command::Request {
                event_id: "2".to_string(),
                message: "Quero muito ir!".to_string(),
            })
        );
    }

    #[test]
    fn login_without_arguments_reports_usage() {
        assert_eq!(
            Command::parse("login alex@example.com"),
            Some(Command::Unknown("uso: login <email> <senha>".to_string()))
        );
    }

    #[test]
    fn unknown_verbs_are_reported() {
        let parsed = Command::parse("dance");
        assert_eq!(
            parsed,
            Some(Command::Unknown("comando desconhecido 'dance'".to_string()))
        );
    }
}
