//! Locating a method body inside TypeScript source without parsing it.
//!
//! [`RegionLocator`] is the seam: the patcher only needs the byte offsets of
//! a method's `{` and its matching `}`. [`BraceScanLocator`] finds them by
//! literal text search and brace counting.
//!
//! # Known limitation
//!
//! The scan counts every `{`/`}` byte, including those inside string
//! literals, template literals and comments. A method body containing an
//! unbalanced brace in such content (`'{'`, `// }`) is mis-measured. Bodies
//! produced by the project generator never contain one.

/// Byte offsets of a `{ ... }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Offset of the opening `{`.
    pub open: usize,
    /// Offset of the matching `}`.
    pub close: usize,
}

impl Region {
    /// First byte after the opening brace.
    pub fn body_start(&self) -> usize {
        self.open + 1
    }

    /// Text strictly between the braces.
    pub fn body<'a>(&self, source: &'a str) -> &'a str {
        &source[self.open + 1..self.close]
    }
}

/// Finds the body of a named method.
pub trait RegionLocator: Send + Sync {
    /// Body of the method *definition* named `method`, if present and balanced.
    fn locate(&self, source: &str, method: &str) -> Option<Region>;
}

/// Literal-text locator: `method(` → matching `)` → `{` → matching `}`.
///
/// Call sites (`this.initializeTools();`) and longer identifiers
/// (`reinitializeTools(`) are skipped; an optional return type annotation
/// (`): Promise<void> {`) is allowed between the parameters and the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceScanLocator;

impl BraceScanLocator {
    pub fn new() -> Self {
        Self
    }
}

impl RegionLocator for BraceScanLocator {
    fn locate(&self, source: &str, method: &str) -> Option<Region> {
        let needle = format!("{method}(");
        let bytes = source.as_bytes();
        let mut from = 0;

        while let Some(rel) = source[from..].find(&needle) {
            let start = from + rel;
            from = start + needle.len();

            if start > 0 {
                let prev = bytes[start - 1];
                if prev == b'.' || is_identifier_byte(prev) {
                    continue;
                }
            }

            let paren = start + method.len();
            let Some(params_end) = matching_close(bytes, paren, b'(', b')') else {
                continue;
            };
            let Some(open) = definition_brace(bytes, params_end + 1) else {
                continue;
            };

            return matching_close(bytes, open, b'{', b'}').map(|close| Region { open, close });
        }

        None
    }
}

/// Offset of the delimiter closing the one at `open_at`, by depth counting.
pub(crate) fn matching_close(bytes: &[u8], open_at: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_at) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// After a parameter list: the `{` that opens a definition body, if this is
/// a definition at all.
fn definition_brace(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    match bytes.get(i)? {
        b'{' => Some(i),
        // Return type annotation: the body starts at the next `{`, unless the
        // statement ends first (an overload signature or declaration).
        b':' => bytes[i..]
            .iter()
            .position(|&b| b == b'{' || b == b';')
            .map(|p| i + p)
            .filter(|&p| bytes[p] == b'{'),
        _ => None,
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
