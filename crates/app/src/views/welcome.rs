//! The welcome/login screen shown while logged out.

use std::fmt::Write;

use sublynx_core::auth::demo_emails;

pub fn render() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== SUBLYNX ===");
    let _ = writeln!(out, "Conectando a cena alternativa\n");
    let _ = writeln!(out, "Entre com 'login <email> <senha>'.");
    let _ = writeln!(
        out,
        "Contas de demonstração: {} (senha: password123)",
        demo_emails().join(", ")
    );
    out
}

/// Inline error for a failed login attempt.
pub fn login_failed() -> String {
    "Credenciais inválidas. Tente admin@sublynx.com / password123".to_string()
}

/// Placeholder for the unimplemented social login providers.
pub fn social_login_notice(provider: &str) -> String {
    format!(
        "Login com {provider} será implementado em breve! \
         Por enquanto, use as contas de demonstração."
    )
}
