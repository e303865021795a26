//! Domain value objects: ComponentKind, RegistrySpec, InsertAnchor,
//! RegistrationStyle.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Every per-kind convention (directory, suffix word, registry file, setter
//! collection) is answered by a `const fn` on [`ComponentKind`] so that
//! adding a kind is a matter of adding match arms here.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ComponentKind ────────────────────────────────────────────────────────────

/// One of the fixed categories of extensible unit in a generated server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Tool,
    Resource,
    Prompt,
    Service,
    Transport,
    Util,
}

impl ComponentKind {
    /// Every kind, in display order.
    pub const ALL: [ComponentKind; 6] = [
        Self::Tool,
        Self::Resource,
        Self::Prompt,
        Self::Service,
        Self::Transport,
        Self::Util,
    ];

    /// Kinds that own an index file and a registry.
    pub const INDEXED: [ComponentKind; 3] = [Self::Tool, Self::Resource, Self::Prompt];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Resource => "resource",
            Self::Prompt => "prompt",
            Self::Service => "service",
            Self::Transport => "transport",
            Self::Util => "util",
        }
    }

    /// Subdirectory of the source root holding components of this kind.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::Tool => "tools",
            Self::Resource => "resources",
            Self::Prompt => "prompts",
            Self::Service => "services",
            Self::Transport => "transports",
            Self::Util => "utils",
        }
    }

    /// Word appended to type and instance names (`WeatherTool`, `weatherTool`).
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Tool => "Tool",
            Self::Resource => "Resource",
            Self::Prompt => "Prompt",
            Self::Service => "Service",
            Self::Transport => "Transport",
            Self::Util => "Util",
        }
    }

    /// Whether components of this kind are re-exported from an `index.ts`.
    pub const fn has_index(&self) -> bool {
        matches!(self, Self::Tool | Self::Resource | Self::Prompt)
    }

    /// Registry conventions, present only for indexed kinds.
    pub const fn registry(&self) -> Option<RegistrySpec> {
        match self {
            Self::Tool => Some(RegistrySpec {
                file: "core/tool-registry.ts",
                collection: "tools",
                init_method: "initializeTools",
            }),
            Self::Resource => Some(RegistrySpec {
                file: "core/resource-registry.ts",
                collection: "resources",
                init_method: "initializeResources",
            }),
            Self::Prompt => Some(RegistrySpec {
                file: "core/prompt-registry.ts",
                collection: "prompts",
                init_method: "initializePrompts",
            }),
            Self::Service | Self::Transport | Self::Util => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tool" | "tools" => Ok(Self::Tool),
            "resource" | "resources" => Ok(Self::Resource),
            "prompt" | "prompts" => Ok(Self::Prompt),
            "service" | "services" => Ok(Self::Service),
            "transport" | "transports" => Ok(Self::Transport),
            "util" | "utils" => Ok(Self::Util),
            other => Err(DomainError::UnknownKind { kind: other.into() }),
        }
    }
}

// ── RegistrySpec ─────────────────────────────────────────────────────────────

/// Fixed conventions of one registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrySpec {
    /// Path of the registry file, relative to the source root.
    pub file: &'static str,
    /// Name of the `Map` field the registry stores components in.
    pub collection: &'static str,
    /// Name of the method whose body receives registration calls.
    pub init_method: &'static str,
}

impl RegistrySpec {
    /// Literal prefix of a registration call, e.g. `this.tools.set(`.
    pub fn setter_prefix(&self) -> String {
        format!("this.{}.set(", self.collection)
    }

    /// Literal prefix of a follow-up initialization call, e.g. `this.tools.get(`.
    pub fn getter_prefix(&self) -> String {
        format!("this.{}.get(", self.collection)
    }
}

// ── InsertAnchor ─────────────────────────────────────────────────────────────

/// Where a new registration call goes relative to the last existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertAnchor {
    /// Directly after the call's closing `)` (and `;` if present).
    #[default]
    EndOfStatement,
    /// After the newline that ends the line holding the call.
    EndOfLine,
}

impl InsertAnchor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EndOfStatement => "end-of-statement",
            Self::EndOfLine => "end-of-line",
        }
    }
}

impl fmt::Display for InsertAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsertAnchor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "end-of-statement" | "statement" => Ok(Self::EndOfStatement),
            "end-of-line" | "line" => Ok(Self::EndOfLine),
            other => Err(DomainError::InvalidSetting {
                setting: "registry.anchor",
                value: other.into(),
            }),
        }
    }
}

// ── RegistrationStyle ────────────────────────────────────────────────────────

/// How many lines a registration consists of.
///
/// Older registries pair every `set(...)` with a follow-up
/// `get(...)?.initialize?.()` call; newer ones only need the `set(...)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStyle {
    /// Paired when the method body already holds a follow-up call, single otherwise.
    #[default]
    Auto,
    Single,
    Paired,
}

impl RegistrationStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Single => "single",
            Self::Paired => "paired",
        }
    }

    /// Resolve `Auto` against the current method body.
    pub fn resolve(self, body: &str, getter_prefix: &str) -> Self {
        match self {
            Self::Auto if body.contains(getter_prefix) => Self::Paired,
            Self::Auto => Self::Single,
            other => other,
        }
    }
}

impl fmt::Display for RegistrationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "single" | "modern" => Ok(Self::Single),
            "paired" | "legacy" => Ok(Self::Paired),
            other => Err(DomainError::InvalidSetting {
                setting: "registry.style",
                value: other.into(),
            }),
        }
    }
}
