use std::collections::HashMap;
use anyhow::{Context, Result};
use crate::analyzers::kappa::cohen_kappa;
use crate::types::{PairReliability, TaggingRow, TaggingSession};

/// All unordered index pairs `(i, j)` with `i < j`, in input order.
pub fn enumerate_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Inner join on exact `text` equality; returns aligned (left, right) categories.
///
/// Many-to-many: a text appearing twice on one side and three times on the other
/// yields six aligned pairs. Left order is preserved, then right order within a match.
pub fn join_on_text<'a>(left: &'a [TaggingRow], right: &'a [TaggingRow]) -> Vec<(&'a str, &'a str)> {
    let mut by_text: HashMap<&str, Vec<&str>> = HashMap::new();
    for row in right {
        by_text
            .entry(row.text.as_str())
            .or_default()
            .push(row.category.as_str());
    }

    let mut aligned = Vec::new();
    for row in left {
        if let Some(matches) = by_text.get(row.text.as_str()) {
            for category in matches {
                aligned.push((row.category.as_str(), *category));
            }
        }
    }
    aligned
}

/// Cohen's Kappa for one pair of sessions over their shared texts.
pub fn pair_reliability(first: &TaggingSession, second: &TaggingSession) -> Result<PairReliability> {
    let aligned = join_on_text(&first.rows, &second.rows);
    if aligned.is_empty() {
        anyhow::bail!("No overlapping text between {} and {}", first.key, second.key);
    }

    let (left, right): (Vec<&str>, Vec<&str>) = aligned.into_iter().unzip();
    let kappa = cohen_kappa(&left, &right)
        .with_context(|| format!("Failed to compute kappa for {} vs {}", first.key, second.key))?;

    if kappa.is_nan() {
        tracing::warn!(
            "kappa undefined for {} vs {}: both sides used a single identical label",
            first.key,
            second.key
        );
    }

    Ok(PairReliability {
        first: first.meta.clone(),
        second: second.meta.clone(),
        overlap: left.len(),
        kappa,
    })
}

/// Reliability for every unordered pair of sessions.
pub fn analyze_pairs(sessions: &[TaggingSession]) -> Result<Vec<PairReliability>> {
    enumerate_pairs(sessions.len())
        .into_iter()
        .map(|(i, j)| pair_reliability(&sessions[i], &sessions[j]))
        .collect()
}
