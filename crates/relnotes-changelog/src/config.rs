use relnotes_core::ChangePackage;
use serde::Deserialize;

pub const DEFAULT_PRINT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProseWrap {
    /// Keep line breaks as written.
    #[default]
    Preserve,
    /// Re-flow paragraphs and list items to the print width.
    Always,
}

/// Quote character used for link titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownStyle {
    pub print_width: usize,
    pub prose_wrap: ProseWrap,
    pub quote_style: QuoteStyle,
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            print_width: DEFAULT_PRINT_WIDTH,
            prose_wrap: ProseWrap::default(),
            quote_style: QuoteStyle::default(),
        }
    }
}

/// Everything the fragment pipeline needs to know about packages and style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSettings {
    pub umbrella: Option<String>,
    pub excluded: Vec<String>,
    /// Organizational prefix stripped before humanizing a package name.
    pub package_prefix: Option<String>,
    pub style: MarkdownStyle,
}

impl FragmentSettings {
    #[must_use]
    pub fn with_umbrella(mut self, name: impl Into<String>) -> Self {
        self.umbrella = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    #[must_use]
    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: MarkdownStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn is_umbrella(&self, name: &str) -> bool {
        self.umbrella.as_deref() == Some(name)
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|e| e == name)
    }

    /// The explicit prefix, or the umbrella's scope up to and including its
    /// last `/`.
    #[must_use]
    pub fn package_prefix(&self) -> Option<&str> {
        if let Some(prefix) = self.package_prefix.as_deref() {
            return Some(prefix);
        }
        let umbrella = self.umbrella.as_deref()?;
        umbrella.rfind('/').map(|pos| &umbrella[..=pos])
    }

    /// Tags a package with its role in the changelog.
    #[must_use]
    pub fn classify(&self, name: &str) -> ChangePackage {
        ChangePackage {
            name: name.to_string(),
            umbrella: self.is_umbrella(name),
            excluded: self.is_excluded(name),
        }
    }
}
