//! Error type for declaration and config-file validation
//!
//! Mappings are configuration data, so malformed input fails at declaration
//! time with the offending key named, rather than surfacing later as a broken
//! registration.

/// Errors raised while declaring mappings or loading mapping files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A declaration was made with an empty key string
    EmptyKey,
    /// A `plug` option was set to an empty name
    EmptyPlug { key: String },
    /// A mode letter outside the recognized set was requested
    InvalidMode { mode: char, origin: String },
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::EmptyKey => write!(f, "mapping declared with an empty key"),
            MapError::EmptyPlug { key } => {
                write!(f, "empty plug name on mapping for key '{}'", key)
            }
            MapError::InvalidMode { mode, origin } => {
                write!(f, "invalid mode letter '{}' in {}", mode, origin)
            }
            MapError::IoError(e) => write!(f, "IO error: {}", e),
            MapError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for MapError {}

/// Mode letters the registration backend understands
pub(crate) const MODE_LETTERS: &str = "nvxsoictl";

/// Validate every letter of a `modes` string, naming `origin` on failure
pub(crate) fn validate_modes(modes: Option<&str>, origin: &str) -> Result<(), MapError> {
    let Some(modes) = modes else {
        return Ok(());
    };

    for mode in modes.chars() {
        if !MODE_LETTERS.contains(mode) {
            return Err(MapError::InvalidMode {
                mode,
                origin: origin.to_string(),
            });
        }
    }
    Ok(())
}
