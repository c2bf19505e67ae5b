use std::sync::LazyLock;
use anyhow::Result;
use regex::Regex;
use crate::types::SessionMeta;

/// `{tagger}_session_{n}_docs_{n}_{date}` — `session` and `docs` are literal separators.
static STEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tagger>[^_]+)_session_(?P<session>[^_]+)_docs_(?P<docs>[^_]+)_(?P<date>[^_]+)$")
        .unwrap()
});

/// Parse session metadata from a filename stem.
pub fn parse_stem(stem: &str) -> Result<SessionMeta> {
    let caps = STEM_PATTERN.captures(stem).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid session file name '{}': expected <tagger>_session_<n>_docs_<n>_<date>",
            stem
        )
    })?;

    Ok(SessionMeta {
        tagger_name: caps["tagger"].to_string(),
        session_number: caps["session"].to_string(),
        document_count: caps["docs"].to_string(),
        tagging_date: caps["date"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_field_stem() {
        let meta = parse_stem("kenneth_session_1_docs_20_2021-09-08").unwrap();
        assert_eq!(meta.tagger_name, "kenneth");
        assert_eq!(meta.session_number, "1");
        assert_eq!(meta.document_count, "20");
        assert_eq!(meta.tagging_date, "2021-09-08");
    }

    #[test]
    fn keeps_numbers_verbatim() {
        let meta = parse_stem("lasse_session_02_docs_100_20210910").unwrap();
        assert_eq!(meta.session_number, "02");
        assert_eq!(meta.tagging_date, "20210910");
    }

    #[test]
    fn rejects_too_few_fields() {
        let err = parse_stem("kenneth_session_1_docs_20").unwrap_err();
        assert!(err.to_string().contains("Invalid session file name"));
    }

    #[test]
    fn rejects_extra_fields() {
        assert!(parse_stem("ken_neth_session_1_docs_20_2021").is_err());
    }

    #[test]
    fn rejects_wrong_separator_tokens() {
        assert!(parse_stem("kenneth_round_1_docs_20_2021-09-08").is_err());
        assert!(parse_stem("kenneth_session_1_files_20_2021-09-08").is_err());
    }
}
