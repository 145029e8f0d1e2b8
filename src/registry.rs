//! The registration boundary: finalized records and the `Registrar` trait

use crate::rhs::Rhs;

/// A finalized option record, one per registered key/mode combination.
///
/// This is the flat shape a registration backend expects: the mapping-file
/// attributes (`modes`, `mods`, `remap`, `plug`, `as`) have already been
/// resolved into the key string, the single `mode` letter, and `noremap`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapArgs {
    /// Action string or callback; the empty string for display-only entries
    pub rhs: Rhs,
    /// Human-readable label
    pub label: Option<String>,
    /// Single mode letter; absent when the declaration requested none
    pub mode: Option<char>,
    pub noremap: Option<bool>,
    pub silent: Option<bool>,
}

/// The external registration API that receives finalized records.
///
/// Backends are handed one record at a time, in original declaration order.
pub trait Registrar {
    fn register(&mut self, key: &str, args: MapArgs);
}

/// A `Registrar` that records everything it receives, in order.
///
/// Used by tests and the preview CLI in place of a live backend.
#[derive(Debug, Default)]
pub struct Recorder {
    pub records: Vec<(String, MapArgs)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record registered under `key`, if any
    pub fn find(&self, key: &str) -> Option<&MapArgs> {
        self.records
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, args)| args)
    }

    /// Keys in registration order
    pub fn keys(&self) -> Vec<&str> {
        self.records.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl Registrar for Recorder {
    fn register(&mut self, key: &str, args: MapArgs) {
        self.records.push((key.to_string(), args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rhs: &str) -> MapArgs {
        MapArgs {
            rhs: Rhs::from(rhs),
            label: None,
            mode: None,
            noremap: None,
            silent: None,
        }
    }

    #[test]
    fn test_recorder_preserves_order() {
        let mut rec = Recorder::new();
        rec.register("a", args("one"));
        rec.register("b", args("two"));
        rec.register("a", args("three"));

        assert_eq!(rec.keys(), vec!["a", "b", "a"]);
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn test_recorder_find_returns_first_match() {
        let mut rec = Recorder::new();
        rec.register("a", args("one"));
        rec.register("a", args("two"));

        assert_eq!(rec.find("a").unwrap().rhs, Rhs::from("one"));
        assert!(rec.find("missing").is_none());
    }
}
