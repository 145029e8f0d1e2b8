//! The pending-mapping accumulator
//!
//! `MapSet` collects mapping declarations in insertion order, lets batches of
//! them be overridden as groups (`split`), and on `register` translates each
//! one into finalized records for a [`Registrar`](crate::registry::Registrar).
//!
//! ```text
//! desc()/set()/ctrl()… → MapSet (ordered) → split() groups → register() → Registrar
//! ```
//!
//! # Example
//!
//! ```
//! use bindery::{MapOpts, MapSet, Recorder};
//!
//! let mut maps = MapSet::new();
//! maps.desc("Save file").set("s", ("write", MapOpts::new().modes("n")))?;
//! maps.ctrl().set("p", "Command palette")?;
//!
//! let mut backend = Recorder::new();
//! maps.register(&mut backend, &MapOpts::new().silent(true))?;
//! assert_eq!(backend.len(), 2);
//! # Ok::<(), bindery::MapError>(())
//! ```

use crate::error::{validate_modes, MapError};
use crate::mapping::{Mapping, Spec};
use crate::modifiers::ModSet;
use crate::options::MapOpts;
use crate::registry::{MapArgs, Registrar};
use crate::translate::translate;

/// Default leader token prepended for `leader` mappings
pub const DEFAULT_LEADER: &str = "<leader>";

/// One slot in the accumulator's ordered sequence
#[derive(Clone, Debug)]
enum Entry {
    Map(Mapping),
    /// Group boundary left behind by `split`
    Divider,
}

/// Ordered, mutable collection of pending mapping declarations
#[derive(Debug)]
pub struct MapSet {
    entries: Vec<Entry>,
    /// Label awaiting the next declaration, consumed one-shot
    pending_label: Option<String>,
    leader: String,
}

impl MapSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending_label: None,
            leader: DEFAULT_LEADER.to_string(),
        }
    }

    /// Create an accumulator with a custom leader token
    pub fn with_leader(leader: impl Into<String>) -> Self {
        Self {
            leader: leader.into(),
            ..Self::new()
        }
    }

    pub fn set_leader(&mut self, leader: impl Into<String>) {
        self.leader = leader.into();
    }

    /// The leader token prepended for `leader` mappings
    pub fn leader_token(&self) -> &str {
        &self.leader
    }

    /// Begin (or continue) the label for the next declaration.
    ///
    /// Repeated calls before the label is consumed append to it, joined with
    /// a single space. The label attaches to exactly the next declaration
    /// appended through any entry point, then clears.
    pub fn desc(&mut self, text: &str) -> &mut Self {
        match &mut self.pending_label {
            Some(label) => {
                label.push(' ');
                label.push_str(text);
            }
            None => self.pending_label = Some(text.to_string()),
        }
        self
    }

    /// Append one declaration at the tail of the sequence.
    ///
    /// `spec` is a bare rhs (`&str`, `String`, [`Rhs`](crate::rhs::Rhs)) or a
    /// `(rhs, MapOpts)` pair. A pending label set via [`desc`](Self::desc) is
    /// consumed before anything else, so it can never leak to a later
    /// declaration.
    pub fn set(&mut self, key: &str, spec: impl Into<Spec>) -> Result<&mut Self, MapError> {
        self.push(key, spec.into(), ModSet::NONE)
    }

    /// Start a ctrl-qualified declaration
    pub fn ctrl(&mut self) -> ModChain<'_> {
        ModChain {
            set: self,
            mods: ModSet::CTRL,
        }
    }

    /// Start an alt-qualified declaration
    pub fn alt(&mut self) -> ModChain<'_> {
        ModChain {
            set: self,
            mods: ModSet::ALT,
        }
    }

    /// Start a shift-qualified declaration; shift is terminal, so no further
    /// modifiers can be chained
    pub fn shift(&mut self) -> ShiftChain<'_> {
        ShiftChain {
            set: self,
            mods: ModSet::SHIFT,
        }
    }

    /// Start a leader-qualified declaration; supports the same ctrl/alt/shift
    /// chaining as the plain entry points
    pub fn leader(&mut self) -> ModChain<'_> {
        ModChain {
            set: self,
            mods: ModSet::LEADER,
        }
    }

    fn push(&mut self, key: &str, spec: Spec, extra: ModSet) -> Result<&mut Self, MapError> {
        // Consume the pending label first; a validation failure below must
        // not leave it attached to a later declaration
        let label = self.pending_label.take();

        let Spec { rhs, mut opts } = spec;
        opts.mods = opts.mods.union(extra);

        let mapping = Mapping {
            key: key.to_string(),
            rhs,
            opts,
            label,
        };
        mapping.validate()?;

        self.entries.push(Entry::Map(mapping));
        Ok(self)
    }

    /// Number of pending declarations (dividers excluded)
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Map(_)))
            .count()
    }

    /// True when the sequence holds no declarations and no dividers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending declarations in insertion order
    pub fn mappings(&self) -> impl Iterator<Item = &Mapping> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Map(m) => Some(m),
            Entry::Divider => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn divider_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Divider))
            .count()
    }

    /// Merge `overrides` into every declaration of the current group (those
    /// after the most recent divider), then seal the group with a divider.
    ///
    /// Purely a staging mutation: nothing is removed or translated. Dividers
    /// bound only `split`'s reach; [`register`](Self::register) overrides
    /// ignore them.
    pub fn split(&mut self, overrides: &MapOpts) -> Result<(), MapError> {
        self.split_with(overrides, |_, _| {})
    }

    /// Like [`split`](Self::split), with a callback run once per affected
    /// declaration after the merge, for programmatic mutation.
    pub fn split_with(
        &mut self,
        overrides: &MapOpts,
        mut each: impl FnMut(&str, &mut MapOpts),
    ) -> Result<(), MapError> {
        validate_modes(overrides.modes.as_deref(), "split override")?;

        let group_start = self
            .entries
            .iter()
            .rposition(|e| matches!(e, Entry::Divider))
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut affected = 0usize;
        for entry in &mut self.entries[group_start..] {
            if let Entry::Map(mapping) = entry {
                mapping.opts.merge(overrides);
                each(&mapping.key, &mut mapping.opts);
                affected += 1;
            }
        }

        self.entries.push(Entry::Divider);
        tracing::trace!("split applied overrides to {} pending mappings", affected);
        Ok(())
    }

    /// Drain the whole accumulator head to tail, translating each
    /// declaration into finalized records and handing them to `registrar` in
    /// insertion order. Dividers are skipped transparently and `overrides`
    /// merges into every drained declaration regardless of them; scoping
    /// different overrides to different groups is what prior
    /// [`split`](Self::split) calls are for.
    ///
    /// Returns the number of records emitted. Afterwards the accumulator is
    /// empty and ready for reuse.
    pub fn register<R: Registrar>(
        &mut self,
        registrar: &mut R,
        overrides: &MapOpts,
    ) -> Result<usize, MapError> {
        self.register_with(registrar, overrides, |_, _| {})
    }

    /// Like [`register`](Self::register), with a callback run with the final
    /// key and record immediately before each emission, for last-instant
    /// mutation.
    pub fn register_with<R: Registrar>(
        &mut self,
        registrar: &mut R,
        overrides: &MapOpts,
        mut each: impl FnMut(&str, &mut MapArgs),
    ) -> Result<usize, MapError> {
        validate_modes(overrides.modes.as_deref(), "register override")?;

        let mut emitted = 0usize;
        for entry in std::mem::take(&mut self.entries) {
            let Entry::Map(mut mapping) = entry else {
                continue;
            };
            mapping.opts.merge(overrides);

            for (key, mut args) in translate(mapping, &self.leader) {
                each(&key, &mut args);
                tracing::debug!("registering '{}' (mode {:?})", key, args.mode);
                registrar.register(&key, args);
                emitted += 1;
            }
        }

        tracing::info!("registered {} finalized mappings", emitted);
        Ok(emitted)
    }
}

impl Default for MapSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent modifier accumulation for qualified declarations.
///
/// Each step adds one modifier to the set; adding one already present is a
/// no-op, so only the meaningful ctrl/alt/shift/leader combinations are
/// reachable. [`shift`](ModChain::shift) narrows to [`ShiftChain`], which
/// only permits the final `set` call.
#[derive(Debug)]
pub struct ModChain<'a> {
    set: &'a mut MapSet,
    mods: ModSet,
}

impl<'a> ModChain<'a> {
    pub fn ctrl(mut self) -> Self {
        self.mods = self.mods.union(ModSet::CTRL);
        self
    }

    pub fn alt(mut self) -> Self {
        self.mods = self.mods.union(ModSet::ALT);
        self
    }

    pub fn shift(self) -> ShiftChain<'a> {
        ShiftChain {
            set: self.set,
            mods: self.mods.union(ModSet::SHIFT),
        }
    }

    /// Append the declaration with the accumulated modifiers merged into any
    /// caller-supplied `mods` (union, never overwrite)
    pub fn set(self, key: &str, spec: impl Into<Spec>) -> Result<&'a mut MapSet, MapError> {
        self.set.push(key, spec.into(), self.mods)
    }
}

/// Terminal state of the modifier chain: shift admits no further modifiers
#[derive(Debug)]
pub struct ShiftChain<'a> {
    set: &'a mut MapSet,
    mods: ModSet,
}

impl<'a> ShiftChain<'a> {
    pub fn set(self, key: &str, spec: impl Into<Spec>) -> Result<&'a mut MapSet, MapError> {
        self.set.push(key, spec.into(), self.mods)
    }
}
