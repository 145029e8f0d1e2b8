//! Modifier sets and key prefixing

use std::fmt;

use serde::Deserialize;

/// A single modifier, as named in mapping files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Leader,
}

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModSet(u8);

impl ModSet {
    pub const NONE: ModSet = ModSet(0);
    pub const CTRL: ModSet = ModSet(0b0001);
    pub const ALT: ModSet = ModSet(0b0010);
    pub const SHIFT: ModSet = ModSet(0b0100);
    pub const LEADER: ModSet = ModSet(0b1000);

    /// Check if ctrl is in the set
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if alt is in the set
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if shift is in the set
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if leader is in the set
    #[inline]
    pub const fn leader(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: ModSet) -> ModSet {
        ModSet(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: ModSet) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Apply the ctrl/alt/shift prefix to a key name.
    ///
    /// The prefix is chosen by first match over the precedence table below,
    /// so a {ctrl, alt} set always yields the combined `C-A-` form rather
    /// than two separate passes. Bare names are wrapped in angle brackets
    /// (`x` becomes `<C-x>`); names already in angle-bracket notation get
    /// the prefix inserted (`<F5>` becomes `<C-F5>`). The leader member is
    /// not handled here; the accumulator prepends its leader token
    /// independently of this prefix.
    pub fn prefix_key(self, key: &str) -> String {
        const PREFIXES: [(ModSet, &str); 7] = [
            (
                ModSet::CTRL.union(ModSet::ALT).union(ModSet::SHIFT),
                "C-A-S-",
            ),
            (ModSet::CTRL.union(ModSet::ALT), "C-A-"),
            (ModSet::CTRL.union(ModSet::SHIFT), "C-S-"),
            (ModSet::ALT.union(ModSet::SHIFT), "A-S-"),
            (ModSet::CTRL, "C-"),
            (ModSet::ALT, "A-"),
            (ModSet::SHIFT, "S-"),
        ];

        let Some((_, prefix)) = PREFIXES.iter().find(|(m, _)| self.contains(*m)) else {
            return key.to_string();
        };

        if let Some(inner) = key.strip_prefix('<').and_then(|k| k.strip_suffix('>')) {
            format!("<{}{}>", prefix, inner)
        } else {
            format!("<{}{}>", prefix, key)
        }
    }
}

impl std::ops::BitOr for ModSet {
    type Output = ModSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl From<Modifier> for ModSet {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Ctrl => ModSet::CTRL,
            Modifier::Alt => ModSet::ALT,
            Modifier::Shift => ModSet::SHIFT,
            Modifier::Leader => ModSet::LEADER,
        }
    }
}

impl FromIterator<Modifier> for ModSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModSet::NONE, |acc, m| acc.union(m.into()))
    }
}

impl fmt::Display for ModSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("ctrl");
        }
        if self.alt() {
            parts.push("alt");
        }
        if self.shift() {
            parts.push("shift");
        }
        if self.leader() {
            parts.push("leader");
        }
        write!(f, "{}", parts.join("+"))
    }
}
