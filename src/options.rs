//! Mapping options and the batch-override merge policy
//!
//! `MapOpts` doubles as the option record on a pending mapping and as the
//! override record passed to `split`/`register`; both sides recognize the
//! same fields.

use crate::modifiers::ModSet;
use crate::rhs::Wrap;

/// Named attributes of a mapping declaration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapOpts {
    /// One-letter mode codes, e.g. `"nvi"`
    pub modes: Option<String>,
    /// Recursive mapping; the backend receives the negated `noremap`
    pub remap: Option<bool>,
    pub silent: Option<bool>,
    /// String rhs wrapping (the mapping-file `as` attribute)
    pub wrap: Option<Wrap>,
    /// Wrap the rhs as an invocation of this named plug-mapping
    pub plug: Option<String>,
    /// Modifier prefixes to inject into the key
    pub mods: ModSet,
}

impl MapOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode letters (builder pattern)
    pub fn modes(mut self, modes: &str) -> Self {
        self.modes = Some(modes.to_string());
        self
    }

    pub fn remap(mut self, remap: bool) -> Self {
        self.remap = Some(remap);
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn plug(mut self, plug: &str) -> Self {
        self.plug = Some(plug.to_string());
        self
    }

    pub fn mods(mut self, mods: ModSet) -> Self {
        self.mods = mods;
        self
    }

    /// Merge an override record into these options.
    ///
    /// `modes` concatenates (the override's letters are appended to any
    /// existing ones) and `mods` unions; every other attribute is replaced
    /// by the override's value when one is present.
    pub fn merge(&mut self, overrides: &MapOpts) {
        if let Some(modes) = &overrides.modes {
            match &mut self.modes {
                Some(existing) => existing.push_str(modes),
                None => self.modes = Some(modes.clone()),
            }
        }
        if let Some(remap) = overrides.remap {
            self.remap = Some(remap);
        }
        if let Some(silent) = overrides.silent {
            self.silent = Some(silent);
        }
        if let Some(wrap) = overrides.wrap {
            self.wrap = Some(wrap);
        }
        if let Some(plug) = &overrides.plug {
            self.plug = Some(plug.clone());
        }
        self.mods = self.mods.union(overrides.mods);
    }
}
