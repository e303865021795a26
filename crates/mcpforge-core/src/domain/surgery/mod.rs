//! Structural text surgery on registry source files.
//!
//! Two independent, idempotent edits:
//!
//! - [`insert_import`] adds an import statement after the last existing one.
//! - [`insert_registration`] adds a registration call inside the registry's
//!   initialization method, after the last existing registration.
//!
//! Both are pure functions from source text to an [`Edit`]; the caller owns
//! reading and writing files. Idempotence is checked by exact substring
//! containment of the (trimmed) line being inserted.

pub mod locator;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::value_objects::{InsertAnchor, RegistrationStyle};

pub use locator::{BraceScanLocator, Region, RegionLocator};

/// An import statement starting a line, possibly spanning several lines,
/// up to its quoted module specifier and optional `;`.
static IMPORT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^import\b[^;'"]*['"][^'"\n]*['"][ \t]*;?"#).expect("valid import pattern")
});

static TOP_LEVEL_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:export|class|interface|abstract[ \t]+class)\b")
        .expect("valid declaration pattern")
});

/// What one edit step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "kebab-case")]
pub enum StepOutcome {
    Inserted,
    AlreadyPresent,
    Skipped(String),
}

impl StepOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Resulting text plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub outcome: StepOutcome,
}

impl Edit {
    fn unchanged(source: &str, outcome: StepOutcome) -> Self {
        Self {
            text: source.to_string(),
            outcome,
        }
    }

    fn splice(source: &str, start: usize, end: usize, insertion: &str) -> Self {
        let mut text = String::with_capacity(source.len() + insertion.len());
        text.push_str(&source[..start]);
        text.push_str(insertion);
        text.push_str(&source[end..]);
        Self {
            text,
            outcome: StepOutcome::Inserted,
        }
    }
}

/// Add `import_line` after the last import statement.
///
/// Without any import, the line goes before the first top-level
/// `export`/`class`/`interface` declaration; without either, the step is
/// skipped.
pub fn insert_import(source: &str, import_line: &str) -> Edit {
    let line = import_line.trim();

    if source.contains(line) {
        return Edit::unchanged(source, StepOutcome::AlreadyPresent);
    }

    if let Some(last) = IMPORT_STATEMENT.find_iter(source).last() {
        let eol = line_end(source, last.end());
        return Edit::splice(source, eol, eol, &format!("\n{line}"));
    }

    if let Some(decl) = TOP_LEVEL_DECLARATION.find(source) {
        let at = decl.start();
        return Edit::splice(source, at, at, &format!("{line}\n\n"));
    }

    Edit::unchanged(
        source,
        StepOutcome::Skipped("no import statement or top-level declaration to anchor on".into()),
    )
}

/// Everything [`insert_registration`] needs to know about one registry.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationPlan<'a> {
    /// Method whose body receives the call, e.g. `initializeTools`.
    pub method: &'a str,
    /// e.g. `this.tools.set(`
    pub setter_prefix: &'a str,
    /// e.g. `this.tools.get(`
    pub getter_prefix: &'a str,
    pub registration_line: &'a str,
    pub initialization_line: &'a str,
    pub anchor: InsertAnchor,
    pub style: RegistrationStyle,
}

/// Add the registration call (and, for paired registries, its
/// initialization call) to the body of `plan.method`.
///
/// A missing method is a skip, not an error: auto-discovery registries have
/// no initialization method at all.
pub fn insert_registration(
    source: &str,
    locator: &dyn RegionLocator,
    plan: &RegistrationPlan<'_>,
) -> Edit {
    let Some(region) = locator.locate(source, plan.method) else {
        return Edit::unchanged(
            source,
            StepOutcome::Skipped(format!("method {}() not found", plan.method)),
        );
    };

    let body = region.body(source);
    let registration = plan.registration_line.trim();

    if body.contains(registration) {
        return Edit::unchanged(source, StepOutcome::AlreadyPresent);
    }

    let style = plan.style.resolve(body, plan.getter_prefix);
    let mut lines = vec![registration];
    if style == RegistrationStyle::Paired {
        lines.push(plan.initialization_line.trim());
    }

    let last_setter = body.rfind(plan.setter_prefix).map(|i| (i, plan.setter_prefix));
    // In paired registries a `set` is followed by its `get(...).initialize()`;
    // the new pair goes after the last complete pair.
    let last_getter = match style {
        RegistrationStyle::Paired => body.rfind(plan.getter_prefix).map(|i| (i, plan.getter_prefix)),
        _ => None,
    };
    let anchor_call = match (last_setter, last_getter) {
        (Some(s), Some(g)) => Some(if g.0 > s.0 { g } else { s }),
        (s, g) => s.or(g),
    };

    match anchor_call {
        Some((rel, prefix)) => {
            let call_start = region.body_start() + rel;
            let (at, insertion) =
                after_call(source, &region, call_start, prefix.len(), plan.anchor, &lines);
            Edit::splice(source, at, at, &insertion)
        }
        None => into_body_without_calls(source, &region, &lines),
    }
}

/// Insertion point and text after the call starting at `call_start`.
fn after_call(
    source: &str,
    region: &Region,
    call_start: usize,
    prefix_len: usize,
    anchor: InsertAnchor,
    lines: &[&str],
) -> (usize, String) {
    // Every prefix ends with the call's opening parenthesis.
    let paren = call_start + prefix_len - 1;
    let end = statement_end(source, paren, region.close);
    let indent = indent_at(source, call_start);

    // A trailing comment stays on the statement it annotates.
    if anchor == InsertAnchor::EndOfLine || only_comment_follows(source, end, region.close) {
        if let Some(nl) = source[end..region.close].find('\n') {
            let text = lines.iter().map(|l| format!("{indent}{l}\n")).collect();
            return (end + nl + 1, text);
        }
    }

    let text = lines.iter().map(|l| format!("\n{indent}{l}")).collect();
    (end, text)
}

/// Body with no registration call yet: append after its last content
/// (keeping any placeholder comment), or fill a blank body.
fn into_body_without_calls(source: &str, region: &Region, lines: &[&str]) -> Edit {
    let body = region.body(source);
    let content_len = body.trim_end().len();

    if body.trim().is_empty() {
        let outer = leading_whitespace(&source[line_start(source, region.open)..]);
        let inner = format!("{outer}  ");
        let mut text = String::from("\n");
        for line in lines {
            text.push_str(&format!("{inner}{line}\n"));
        }
        text.push_str(outer);
        return Edit::splice(source, region.body_start(), region.close, &text);
    }

    let at = region.body_start() + content_len;
    let indent = leading_whitespace(&source[line_start(source, at)..at]).to_string();
    let text: String = lines.iter().map(|l| format!("\n{indent}{l}")).collect();
    Edit::splice(source, at, at, &text)
}

/// End of the statement whose call parenthesis opens at `paren`: just past
/// the first `;` on the same line after the call, else just past the `)`.
fn statement_end(source: &str, paren: usize, limit: usize) -> usize {
    let bytes = source.as_bytes();
    let Some(close) = locator::matching_close(bytes, paren, b'(', b')').filter(|&c| c < limit)
    else {
        return line_end(source, paren).min(limit);
    };

    let line_limit = line_end(source, close).min(limit);
    source[close..line_limit]
        .find(';')
        .map(|p| close + p + 1)
        .unwrap_or(close + 1)
}

/// Offset of the `\n` ending the line containing `pos`, or the text length.
fn line_end(source: &str, pos: usize) -> usize {
    source[pos..]
        .find('\n')
        .map(|i| pos + i)
        .unwrap_or(source.len())
}

/// Offset of the first byte of the line containing `pos`.
fn line_start(source: &str, pos: usize) -> usize {
    source[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Whether the rest of the line after `pos` holds only a `//` comment or a
/// closed `/* */` comment.
fn only_comment_follows(source: &str, pos: usize, limit: usize) -> bool {
    let rest = source[pos..line_end(source, pos).min(limit)].trim();
    rest.starts_with("//") || (rest.starts_with("/*") && rest.ends_with("*/"))
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Indentation for a line inserted next to the code at `pos`: the text
/// before `pos` when it is pure whitespace, else the line's own indent.
fn indent_at(source: &str, pos: usize) -> String {
    let prefix = &source[line_start(source, pos)..pos];
    if prefix.chars().all(char::is_whitespace) {
        prefix.to_string()
    } else {
        leading_whitespace(prefix).to_string()
    }
}
