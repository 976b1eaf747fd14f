//! Markdown normalization for composed fragments.
//!
//! Each pass maps a list of lines to a new list and leaves fenced code
//! untouched. The passes run in a fixed order; only fence validation can
//! fail.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{MarkdownStyle, ProseWrap, QuoteStyle};
use crate::error::NormalizeError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    code: bool,
}

impl Line {
    fn prose(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: false,
        }
    }

    fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: true,
        }
    }

    fn is_blank(&self) -> bool {
        !self.code && self.text.trim().is_empty()
    }
}

/// Normalizes markdown text according to `style`.
///
/// # Errors
///
/// Returns `NormalizeError::UnclosedFence` if a fenced code block is opened
/// but never closed.
pub fn normalize_markdown(md: &str, style: &MarkdownStyle) -> Result<String, NormalizeError> {
    let mut lines = split_code_fences(md)?;

    lines = strip_trailing_whitespace(lines);
    lines = normalize_bullets(lines);
    lines = normalize_link_titles(lines, style.quote_style);
    lines = collapse_blank_lines(lines);
    if style.prose_wrap == ProseWrap::Always {
        lines = wrap_prose(lines, style.print_width);
    }

    Ok(finish(lines))
}

// ---------------------------------------------------------------------------
// Pass 1: Code fences
// ---------------------------------------------------------------------------

fn fence_opening(line: &str) -> Option<(char, usize)> {
    let rest = line.trim_start_matches(' ');
    if line.len() - rest.len() > 3 {
        return None;
    }
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == marker).count();
    (len >= 3).then_some((marker, len))
}

fn closes_fence(line: &str, marker: char, len: usize) -> bool {
    fence_opening(line).is_some_and(|(m, l)| m == marker && l >= len)
        && line.trim().chars().all(|c| c == marker)
}

fn split_code_fences(md: &str) -> Result<Vec<Line>, NormalizeError> {
    let mut lines = Vec::new();
    let mut open: Option<(char, usize, usize)> = None;

    for (idx, raw) in md.lines().enumerate() {
        match open {
            Some((marker, len, _)) => {
                if closes_fence(raw, marker, len) {
                    open = None;
                }
                lines.push(Line::code(raw));
            }
            None => {
                if let Some((marker, len)) = fence_opening(raw) {
                    open = Some((marker, len, idx + 1));
                    lines.push(Line::code(raw));
                } else {
                    lines.push(Line::prose(raw));
                }
            }
        }
    }

    match open {
        Some((_, _, line)) => Err(NormalizeError::UnclosedFence { line }),
        None => Ok(lines),
    }
}

// ---------------------------------------------------------------------------
// Pass 2: Trailing whitespace
// ---------------------------------------------------------------------------

fn strip_trailing_whitespace(lines: Vec<Line>) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| {
            if line.code {
                line
            } else {
                Line::prose(line.text.trim_end())
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pass 3: Bullet markers and thematic breaks
// ---------------------------------------------------------------------------

static THEMATIC_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:(?:\* *){3,}|(?:_ *){3,}|(?:- *){3,})$").expect("valid regex")
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)[*+]( +)").expect("valid regex"));

fn normalize_bullets(lines: Vec<Line>) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| {
            if line.code {
                line
            } else if THEMATIC_BREAK_RE.is_match(&line.text) {
                Line::prose("---")
            } else {
                Line::prose(BULLET_RE.replace(&line.text, "${1}-${2}"))
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pass 4: Link title quotes
// ---------------------------------------------------------------------------

static DOUBLE_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\]\((\S+) "([^"]*)"\)"#).expect("valid regex"));

static SINGLE_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\((\S+) '([^']*)'\)").expect("valid regex"));

fn normalize_link_titles(lines: Vec<Line>, quote: QuoteStyle) -> Vec<Line> {
    let (re, from, to) = match quote {
        QuoteStyle::Single => (&*DOUBLE_TITLE_RE, '"', '\''),
        QuoteStyle::Double => (&*SINGLE_TITLE_RE, '\'', '"'),
    };

    lines
        .into_iter()
        .map(|line| {
            if line.code {
                return line;
            }
            let text = re.replace_all(&line.text, |caps: &Captures<'_>| {
                let title = &caps[2];
                if title.contains(to) {
                    format!("]({} {from}{title}{from})", &caps[1])
                } else {
                    format!("]({} {to}{title}{to})", &caps[1])
                }
            });
            Line::prose(text)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pass 5: Blank lines
// ---------------------------------------------------------------------------

fn collapse_blank_lines(lines: Vec<Line>) -> Vec<Line> {
    let mut result: Vec<Line> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.is_blank() && result.last().is_some_and(Line::is_blank) {
            continue;
        }
        result.push(line);
    }

    result
}

// ---------------------------------------------------------------------------
// Pass 6: Prose wrapping
// ---------------------------------------------------------------------------

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *(?:[-*+]|\d+[.)]) +)(.*)$").expect("valid regex"));

struct Paragraph {
    first_prefix: String,
    continuation_prefix: String,
    words: Vec<String>,
}

impl Paragraph {
    fn new(first_prefix: String, continuation_prefix: String, text: &str) -> Self {
        let mut paragraph = Self {
            first_prefix,
            continuation_prefix,
            words: Vec::new(),
        };
        paragraph.push_text(text);
        paragraph
    }

    fn push_text(&mut self, text: &str) {
        self.words
            .extend(text.split_whitespace().map(ToString::to_string));
    }

    fn render(self, width: usize) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut current = self.first_prefix;
        let mut has_word = false;

        for word in self.words {
            if has_word && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(Line::prose(std::mem::take(&mut current)));
                current.push_str(&self.continuation_prefix);
                current.push_str(&word);
            } else {
                if has_word {
                    current.push(' ');
                }
                current.push_str(&word);
            }
            has_word = true;
        }

        lines.push(Line::prose(current.trim_end()));
        lines
    }
}

fn is_unwrappable(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with('#')
        || trimmed.starts_with('|')
        || trimmed.starts_with('<')
        || trimmed.starts_with('>')
        || THEMATIC_BREAK_RE.is_match(text)
}

fn wrap_prose(lines: Vec<Line>, width: usize) -> Vec<Line> {
    let mut result = Vec::with_capacity(lines.len());
    let mut paragraph: Option<Paragraph> = None;

    for line in lines {
        if line.code || line.is_blank() || is_unwrappable(&line.text) {
            if let Some(done) = paragraph.take() {
                result.extend(done.render(width));
            }
            result.push(line);
            continue;
        }

        if let Some(caps) = LIST_ITEM_RE.captures(&line.text) {
            if let Some(done) = paragraph.take() {
                result.extend(done.render(width));
            }
            let marker = caps[1].to_string();
            let continuation = " ".repeat(marker.chars().count());
            paragraph = Some(Paragraph::new(marker, continuation, &caps[2]));
        } else if let Some(open) = paragraph.as_mut() {
            open.push_text(&line.text);
        } else {
            let indent = " ".repeat(line.text.len() - line.text.trim_start().len());
            paragraph = Some(Paragraph::new(indent.clone(), indent, &line.text));
        }
    }

    if let Some(done) = paragraph.take() {
        result.extend(done.render(width));
    }

    result
}

// ---------------------------------------------------------------------------
// Pass 7: Document edges
// ---------------------------------------------------------------------------

fn finish(lines: Vec<Line>) -> String {
    let start = lines.iter().position(|l| !l.is_blank());
    let end = lines.iter().rposition(|l| !l.is_blank());

    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };

    let mut output = lines[start..=end]
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    output.push('\n');
    output
}
