//! The alternative marketplace tab.

use std::fmt::Write;

use sublynx_core::filter::CATEGORY_ALL_PT;
use sublynx_core::marketplace::Category;

use crate::state::AppState;
use crate::views::format_reais;

/// How many tags a card shows before truncating to "+n".
const MAX_CARD_TAGS: usize = 3;

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Marketplace Alternativo ===");
    let _ = writeln!(out, "Feira digital de itens únicos e alternativos\n");

    let projection = state.marketplace.projection();
    let featured = projection.iter().filter(|i| i.featured).count();
    let category_label = state
        .marketplace
        .filter
        .category
        .as_deref()
        .and_then(Category::parse)
        .map(Category::display_name)
        .unwrap_or(CATEGORY_ALL_PT);
    let sort_label = state
        .marketplace
        .sort
        .map(|s| s.as_str())
        .unwrap_or("nenhuma");
    let _ = writeln!(
        out,
        "{} itens encontrados · {featured} em destaque · Categoria: {category_label} · Ordenação: {sort_label}\n",
        projection.len()
    );

    for item in &projection {
        let mut badges = vec![item.category.display_name().to_string()];
        if item.featured {
            badges.push("Destaque".to_string());
        }
        if item.tradeable {
            badges.push("Troca".to_string());
        }
        if let Some(pct) = item.discount_pct {
            badges.push(format!("-{pct}%"));
        }

        let _ = writeln!(out, "[{}] {} ({})", item.id, item.name, badges.join(" · "));

        let price = match item.original_price() {
            Some(original) => format!(
                "{} (de {})",
                format_reais(item.price),
                format_reais(original)
            ),
            None => format_reais(item.price),
        };
        let _ = writeln!(out, "    {price} · {}", item.condition.display_name());
        let _ = writeln!(out, "    {}", item.description);

        let verified = if item.seller.verified { " ✓" } else { "" };
        let _ = write!(
            out,
            "    {}{verified} ★{:.1} · {}",
            item.seller.name, item.seller.rating, item.seller.location
        );
        if let Some(response) = &item.seller.response_time {
            let _ = write!(out, " · responde em {response}");
        }
        let _ = writeln!(out);

        let shown: Vec<&str> = item
            .tags
            .iter()
            .take(MAX_CARD_TAGS)
            .map(String::as_str)
            .collect();
        let overflow = item.tags.len().saturating_sub(MAX_CARD_TAGS);
        if overflow > 0 {
            let _ = writeln!(out, "    tags: {} +{overflow}", shown.join(", "));
        } else if !shown.is_empty() {
            let _ = writeln!(out, "    tags: {}", shown.join(", "));
        }

        let like_marker = if item.likes.active { "♥" } else { "♡" };
        let _ = writeln!(
            out,
            "    {like_marker} {} · 👁 {} · {} observando",
            item.likes.count, item.views, item.watchers
        );
        let _ = writeln!(out);
    }

    if projection.is_empty() {
        let _ = writeln!(out, "Nenhum item encontrado — use 'search' ou 'category all' para limpar os filtros");
    }

    let _ = writeln!(
        out,
        "Comandos: search <texto> · category <id> · sort <featured|recent|popular|price-asc|price-desc> · like <id> · buy <id> · chat <id> · sell"
    );
    out
}
