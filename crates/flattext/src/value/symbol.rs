//! Symbolic identifier values

/// A symbolic identifier with an optional description.
///
/// Symbols are opaque: two symbols with the same description are still
/// distinct identities. Equality is by pointer, applied where the symbol
/// is wrapped in an `Arc` inside [`super::Value`].
#[derive(Debug, Clone, Default)]
pub struct SymbolValue {
    /// Human-readable description (may be absent)
    pub description: Option<String>,
}

impl SymbolValue {
    /// Create a symbol with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Create a symbol with no description
    pub fn anonymous() -> Self {
        Self { description: None }
    }
}

impl std::fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
