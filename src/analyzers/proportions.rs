use std::collections::BTreeMap;
use anyhow::Result;
use crate::types::{CategoryShare, ProportionSummary, TaggingSession};

/// Character-weighted category, porn and offensive proportions for one session.
///
/// Buckets are independent: a row counts toward its category and, when flagged,
/// toward porn and offensive as well, so the percentages need not sum to 100.
pub fn summarize_proportions(session: &TaggingSession) -> Result<ProportionSummary> {
    let total_chars: usize = session.rows.iter().map(|r| r.char_len()).sum();
    if total_chars == 0 {
        anyhow::bail!("Session {} contains no text", session.key);
    }

    // BTreeMap keeps categories in ascending order
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut porn_chars = 0usize;
    let mut offensive_chars = 0usize;

    for row in &session.rows {
        let len = row.char_len();
        *by_category.entry(row.category.as_str()).or_insert(0) += len;
        if row.is_porn {
            porn_chars += len;
        }
        if row.is_offensive {
            offensive_chars += len;
        }
    }

    let categories = by_category
        .into_iter()
        .map(|(category, chars)| CategoryShare {
            category: category.to_string(),
            chars,
            percent: percent(chars, total_chars),
        })
        .collect();

    Ok(ProportionSummary {
        total_chars,
        categories,
        porn_percent: percent(porn_chars, total_chars),
        offensive_percent: percent(offensive_chars, total_chars),
    })
}

fn percent(part: usize, total: usize) -> f64 {
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SessionMeta, TaggingRow};

    fn session(rows: Vec<TaggingRow>) -> TaggingSession {
        TaggingSession {
            key: "anna_session_1_docs_1_d".to_string(),
            meta: SessionMeta {
                tagger_name: "anna".to_string(),
                session_number: "1".to_string(),
                document_count: "1".to_string(),
                tagging_date: "d".to_string(),
            },
            rows,
        }
    }

    #[test]
    fn equal_length_rows_split_by_category() {
        let s = session(vec![
            TaggingRow::new("ab", "x"),
            TaggingRow::new("cd", "x"),
            TaggingRow::new("ef", "y"),
        ]);
        let summary = summarize_proportions(&s).unwrap();

        assert_eq!(summary.total_chars, 6);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, "x");
        assert_eq!(format!("{:.2}", summary.categories[0].percent), "66.67");
        assert_eq!(summary.categories[1].category, "y");
        assert_eq!(format!("{:.2}", summary.categories[1].percent), "33.33");
    }

    #[test]
    fn weights_by_characters_not_rows() {
        let s = session(vec![
            TaggingRow::new("a", "short"),
            TaggingRow::new("abc", "long"),
        ]);
        let summary = summarize_proportions(&s).unwrap();

        assert_eq!(summary.categories[0].category, "long");
        assert_eq!(summary.categories[0].percent, 75.0);
        assert_eq!(summary.categories[1].percent, 25.0);
    }

    #[test]
    fn counts_unicode_scalars() {
        let s = session(vec![
            TaggingRow::new("æøå", "correct_language"),
            TaggingRow::new("abc", "wrong_language"),
        ]);
        let summary = summarize_proportions(&s).unwrap();

        assert_eq!(summary.total_chars, 6);
        assert_eq!(summary.categories[0].percent, 50.0);
    }

    #[test]
    fn flags_overlap_with_categories() {
        let mut flagged = TaggingRow::new("abcd", "correct_language");
        flagged.is_porn = true;
        flagged.is_offensive = true;
        let mut offensive = TaggingRow::new("ef", "not_language");
        offensive.is_offensive = true;
        let s = session(vec![flagged, offensive, TaggingRow::new("gh", "skipped")]);

        let summary = summarize_proportions(&s).unwrap();
        assert_eq!(summary.porn_percent, 50.0);
        assert_eq!(summary.offensive_percent, 75.0);

        let category_total: f64 = summary.categories.iter().map(|c| c.percent).sum();
        assert!((category_total - 100.0).abs() < 1e-9);
        for share in &summary.categories {
            assert!((0.0..=100.0).contains(&share.percent));
        }
    }

    #[test]
    fn empty_session_is_error() {
        let err = summarize_proportions(&session(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("contains no text"));
    }

    #[test]
    fn session_of_empty_strings_is_error() {
        let s = session(vec![TaggingRow::new("", "skipped")]);
        assert!(summarize_proportions(&s).is_err());
    }
}
