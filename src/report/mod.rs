pub mod markdown;

pub use markdown::MarkdownRenderer;

use crate::config::models::Definition;
use crate::types::{PairReliability, ReliabilityReport, SessionReport};

/// Render the full report: proportions, definitions, then pairwise reliability.
pub fn render_report(title: &str, definitions: &[Definition], report: &ReliabilityReport) -> String {
    let mut md = MarkdownRenderer::new();

    md.add(MarkdownRenderer::title(1, title));
    md.add(MarkdownRenderer::title(2, "Text proportions"));
    md.add(MarkdownRenderer::rule());

    for session in &report.sessions {
        add_session_block(&mut md, session);
    }

    md.add(MarkdownRenderer::title(2, "Definitions"));
    for def in definitions {
        md.add(format!(
            "- {}: {}",
            MarkdownRenderer::code(&def.name),
            def.description
        ));
    }

    md.add(MarkdownRenderer::title(2, "Intercoder Reliability"));
    md.add(MarkdownRenderer::rule());

    for pair in &report.pairs {
        add_pair_block(&mut md, pair);
    }

    md.text()
}

fn add_session_block(md: &mut MarkdownRenderer, session: &SessionReport) {
    let meta = &session.meta;
    md.add(format!(
        "{} (Session: {})",
        MarkdownRenderer::bold(&meta.tagger_name),
        meta.session_number
    ));
    md.add(MarkdownRenderer::list([
        MarkdownRenderer::italic(&format!("Date: {}", meta.tagging_date)),
        MarkdownRenderer::italic(&format!("Sentences tagged: {}", session.sentences)),
        MarkdownRenderer::italic(&format!("Documents tagged: {}", meta.document_count)),
    ]));

    let p = &session.proportions;
    let mut items: Vec<String> = p
        .categories
        .iter()
        .map(|c| {
            format!(
                "{:.2}% of characters is {}",
                c.percent,
                MarkdownRenderer::code(&c.category)
            )
        })
        .collect();
    items.push(format!("{:.2}% of characters is porn", p.porn_percent));
    items.push(format!("{:.2}% of characters is offensive", p.offensive_percent));

    md.add(format!("Proportions:\n\n{}", MarkdownRenderer::list(items)));
}

fn add_pair_block(md: &mut MarkdownRenderer, pair: &PairReliability) {
    md.add(format!(
        "{} (Session: {}) vs {} - (Session: {})",
        MarkdownRenderer::bold(&pair.first.tagger_name),
        pair.first.session_number,
        MarkdownRenderer::bold(&pair.second.tagger_name),
        pair.second.session_number
    ));
    md.add(format!("- Cohen's Kappa: {}", format_kappa(pair.kappa)));
}

/// Four decimals; an undefined statistic prints as `nan`.
pub fn format_kappa(kappa: f64) -> String {
    if kappa.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.4}", kappa)
    }
}
