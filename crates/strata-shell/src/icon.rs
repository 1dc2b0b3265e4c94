//! Icon references and resolved icon tokens.
//!
//! Toolbar items carry an [`IconSource`], a cheap reference to an icon
//! resource by name. The chrome provider resolves sources into [`Icon`]
//! tokens, opaque handles the native toolbar knows how to draw. Resolution is
//! best-effort: a missing resource simply yields no icon.

use std::fmt;
use std::sync::Arc;

/// A reference to an icon resource, by name or path.
///
/// Cloning is cheap; the underlying string is shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IconSource(Arc<str>);

impl IconSource {
    /// Create a new icon reference.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The resource name this reference points at.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconSource {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IconSource {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IconSource").field(&self.name()).finish()
    }
}

/// An opaque, resolved, themed drawable token.
///
/// Produced by the chrome provider and consumed by the native toolbar; this
/// crate never inspects it beyond identity.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon(Arc<str>);

impl Icon {
    /// Create a new icon token.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Debug name of the resolved resource.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Icon").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_cheap_to_clone_and_compare() {
        let a = IconSource::from("save.svg");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.name(), "save.svg");
    }

    #[test]
    fn icon_identity() {
        assert_eq!(Icon::new("back"), Icon::new("back"));
        assert_ne!(Icon::new("back"), Icon::new("search"));
    }
}
