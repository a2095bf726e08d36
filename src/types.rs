//! Common vocabulary and format constants shared across the generator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Begin marker of a symbol block.
pub const BEGIN_SYMBOL: &str = "BEGINSYMBOL";
/// End marker of a symbol block.
pub const END_SYMBOL: &str = "ENDSYMBOL";
/// Begin marker of an axiom block.
pub const BEGIN_TBOX: &str = "BEGINTBOX";
/// End marker of an axiom block.
pub const END_TBOX: &str = "ENDTBOX";

/// Display-name prefix marking a negated concept.
pub const NOT_PREFIX: &str = "NOT ";
/// Display-name prefix marking an existential role restriction.
pub const EXISTS_PREFIX: &str = "EXISTS ";
/// Display-name prefix marking an inverse role. Part of the consumer's
/// format; the decorators never produce it.
pub const INV_PREFIX: &str = "INV ";

/// Kind of a symbol or hierarchy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A role (binary relation) name.
    Role,
    /// A concept name.
    Concept,
}

impl SymbolKind {
    /// Keyword used for this kind in the symbol file format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Role => "role",
            SymbolKind::Concept => "concept",
        }
    }

    /// Parse a symbol-file kind keyword.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "role" => Some(SymbolKind::Role),
            "concept" => Some(SymbolKind::Concept),
            _ => None,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (kind, name) pair from the symbol corpus. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Kind of the symbol.
    pub kind: SymbolKind,
    /// Identifier, unique within its kind for well-formed corpora.
    pub name: String,
}
