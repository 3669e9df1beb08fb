use serde::{Deserialize, Serialize};

/// One category of structural unit carved out of a syntax tree
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum UnitKind {
    Import,
    Literal,
    Comment,
    Function,
    Subfunction,
    Method,
    Class,
    Interface,
}

impl UnitKind {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Literal => "literal",
            Self::Comment => "comment",
            Self::Function => "function",
            Self::Subfunction => "subfunction",
            Self::Method => "method",
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// Capability tier of a language: which unit categories exist for it.
/// Ordered, because each tier's pipeline stage requires the previous one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Capability {
    /// Imports, literals and comments only
    Plain,
    /// Adds functions and subfunctions
    Function,
    /// Adds classes and methods
    Class,
    /// Adds interfaces
    Interface,
}

/// One classified unit: a half-open byte range into the original source,
/// plus the name its declaration carries (when one is derivable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpan {
    pub start_byte: usize,
    pub end_byte: usize,
    pub name: Option<String>,
}

impl UnitSpan {
    #[must_use]
    pub const fn new(start_byte: usize, end_byte: usize) -> Self {
        Self {
            start_byte,
            end_byte,
            name: None,
        }
    }

    /// Check whether `inner` lies fully within this span
    #[must_use]
    pub fn contains(&self, inner: &Self) -> bool {
        inner.start_byte >= self.start_byte && inner.end_byte <= self.end_byte
    }

    /// Number of bytes the span covers
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_kind_names() {
        assert_eq!(UnitKind::Function.as_str(), "function");
        assert_eq!(UnitKind::Interface.as_str(), "interface");
    }

    #[test]
    fn test_capability_ordering() {
        assert!(Capability::Plain < Capability::Function);
        assert!(Capability::Function < Capability::Class);
        assert!(Capability::Class < Capability::Interface);
    }

    #[test]
    fn test_span_containment() {
        let outer = UnitSpan::new(10, 50);
        let inner = UnitSpan::new(20, 30);
        let overlapping = UnitSpan::new(40, 60);
        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&overlapping));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_span_len() {
        assert_eq!(UnitSpan::new(10, 50).len(), 40);
        assert!(UnitSpan::new(7, 7).is_empty());
    }
}
