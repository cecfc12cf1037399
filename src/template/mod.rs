//! Page templating by literal placeholder substitution
//!
//! Templates are plain HTML files under the static root containing named
//! `{PLACEHOLDER}` markers. Rendering replaces every occurrence of each named
//! marker with its value, literally. Escaping is the caller's job: every
//! user-originated text field must go through [`escape_html`] before
//! substitution; numeric and structural fields are substituted raw.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A template file could not be read
#[derive(Debug, Error)]
#[error("template {} could not be read: {source}", path.display())]
pub struct TemplateError {
    /// Path of the missing or unreadable template
    pub path: PathBuf,
    source: std::io::Error,
}

/// Loads templates relative to the static root
#[derive(Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at the given directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load a template by path relative to the root
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the file is absent or unreadable.
    /// Callers degrade this to an inline diagnostic fragment via
    /// [`missing_template_fragment`] rather than failing the whole response.
    pub async fn load(&self, relative: &str) -> Result<Template, TemplateError> {
        let path = self.root.join(relative);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Template { raw }),
            Err(source) => Err(TemplateError { path, source }),
        }
    }
}

/// A loaded template ready for substitution
#[derive(Debug)]
pub struct Template {
    raw: String,
}

impl Template {
    /// Build a template from an in-memory string
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Substitute `{NAME}` markers with the given values
    ///
    /// Unknown markers in the template are left untouched; unused values are
    /// ignored.
    #[must_use]
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = self.raw.clone();
        for (name, value) in values {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// Inline diagnostic shown in place of a missing template
#[must_use]
pub fn missing_template_fragment(error: &TemplateError) -> String {
    format!(
        "<h1>Шаблон не найден</h1><p>{}</p>",
        escape_html(&error.path.display().to_string())
    )
}

/// HTML-escape user-originated text
///
/// Safe for both element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML-escape multi-line text, converting newlines to `<br>`
#[must_use]
pub fn escape_multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_named_placeholders() {
        let template = Template::from_raw("<h1>{TITLE}</h1><p>{TITLE} — {COUNTRY}</p>");
        let html = template.render(&[("TITLE", "Алтай"), ("COUNTRY", "Россия")]);
        assert_eq!(html, "<h1>Алтай</h1><p>Алтай — Россия</p>");
    }

    #[test]
    fn unknown_placeholders_are_left_untouched() {
        let template = Template::from_raw("{TITLE} {UNKNOWN}");
        assert_eq!(template.render(&[("TITLE", "x")]), "x {UNKNOWN}");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"wild" & 'free'</b>"#),
            "&lt;b&gt;&quot;wild&quot; &amp; &#39;free&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn multiline_becomes_br() {
        assert_eq!(escape_multiline("день 1\nдень 2"), "день 1<br>день 2");
    }

    #[tokio::test]
    async fn missing_template_degrades_to_diagnostic() {
        let store = TemplateStore::new("/nonexistent");
        let err = store.load("templates/card_template.html").await.unwrap_err();
        let fragment = missing_template_fragment(&err);
        assert!(fragment.starts_with("<h1>Шаблон не найден</h1>"));
        assert!(fragment.contains("card_template.html"));
    }
}
