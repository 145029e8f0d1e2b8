//! Mapping declarations and the `Spec` normalization for declaring them

use crate::error::{validate_modes, MapError};
use crate::options::MapOpts;
use crate::rhs::Rhs;

/// One pending keymap request, held in the accumulator until flushed
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    /// Key or key-combo name, before modifier prefixing
    pub key: String,
    /// The action
    pub rhs: Rhs,
    pub opts: MapOpts,
    /// Display label, attached once at creation and never reassigned
    pub label: Option<String>,
}

impl Mapping {
    /// Fail fast on malformed declarations, naming the offending key
    pub(crate) fn validate(&self) -> Result<(), MapError> {
        if self.key.is_empty() {
            return Err(MapError::EmptyKey);
        }
        if matches!(self.opts.plug.as_deref(), Some("")) {
            return Err(MapError::EmptyPlug {
                key: self.key.clone(),
            });
        }
        validate_modes(
            self.opts.modes.as_deref(),
            &format!("mapping for key '{}'", self.key),
        )
    }
}

/// Normalized form of the value side of a declaration.
///
/// Declaration entry points take `impl Into<Spec>`, so a bare string or
/// `Rhs` reads as "rhs with no options" while a `(rhs, opts)` pair carries
/// a full option record.
#[derive(Clone, Debug)]
pub struct Spec {
    pub rhs: Rhs,
    pub opts: MapOpts,
}

impl Spec {
    pub fn new(rhs: impl Into<Rhs>, opts: MapOpts) -> Self {
        Self {
            rhs: rhs.into(),
            opts,
        }
    }
}

impl From<&str> for Spec {
    fn from(rhs: &str) -> Self {
        Spec::new(rhs, MapOpts::default())
    }
}

impl From<String> for Spec {
    fn from(rhs: String) -> Self {
        Spec::new(rhs, MapOpts::default())
    }
}

impl From<Rhs> for Spec {
    fn from(rhs: Rhs) -> Self {
        Spec {
            rhs,
            opts: MapOpts::default(),
        }
    }
}

impl<R: Into<Rhs>> From<(R, MapOpts)> for Spec {
    fn from((rhs, opts): (R, MapOpts)) -> Self {
        Spec {
            rhs: rhs.into(),
            opts,
        }
    }
}
