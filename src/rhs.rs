//! Right-hand sides of mappings: action strings or callables, plus `Wrap`

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

/// A callable right-hand side
pub type Callback = Rc<dyn Fn()>;

/// The action side of a mapping: a string (command name, plug name, snippet)
/// or an invocable callback.
#[derive(Clone)]
pub enum Rhs {
    Str(String),
    Func(Callback),
}

impl Rhs {
    /// The empty action (display-only mappings)
    pub fn empty() -> Self {
        Rhs::Str(String::new())
    }

    /// Wrap a closure as a callable right-hand side
    pub fn func(f: impl Fn() + 'static) -> Self {
        Rhs::Func(Rc::new(f))
    }

    /// The string form, if this is a string action
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Rhs::Str(s) => Some(s),
            Rhs::Func(_) => None,
        }
    }
}

impl fmt::Debug for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rhs::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Rhs::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl PartialEq for Rhs {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rhs::Str(a), Rhs::Str(b)) => a == b,
            (Rhs::Func(a), Rhs::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Rhs {
    fn from(s: &str) -> Self {
        Rhs::Str(s.to_string())
    }
}

impl From<String> for Rhs {
    fn from(s: String) -> Self {
        Rhs::Str(s)
    }
}

/// How a string right-hand side gets wrapped before registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wrap {
    /// `<cmd>{rhs}<cr>`
    Cmd,
    /// `<cmd>lua {rhs}<cr>`
    Lua,
    /// `<cmd>call {rhs}<cr>`
    Call,
}

impl Wrap {
    /// Apply this wrapping to an action string
    pub fn apply(self, rhs: &str) -> String {
        match self {
            Wrap::Cmd => format!("<cmd>{}<cr>", rhs),
            Wrap::Lua => format!("<cmd>lua {}<cr>", rhs),
            Wrap::Call => format!("<cmd>call {}<cr>", rhs),
        }
    }
}
