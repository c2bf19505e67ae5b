/// Append-only Markdown builder. Fragments are joined by a blank line.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    fragments: Vec<String>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn title(level: usize, text: &str) -> String {
        format!("{} {}", "#".repeat(level), text)
    }

    pub fn rule() -> &'static str {
        "----"
    }

    pub fn bold(text: &str) -> String {
        format!("**{}**", text)
    }

    pub fn italic(text: &str) -> String {
        format!("*{}*", text)
    }

    pub fn code(text: &str) -> String {
        format!("`{}`", text)
    }

    /// One `- item` per line, no blank lines in between.
    pub fn list<I, S>(items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| format!("- {}", item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn text(&self) -> String {
        self.fragments.join("\n\n")
    }
}
