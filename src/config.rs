//! YAML mapping files
//!
//! Declarations can be written in a `mappings.yaml` instead of code:
//!
//! ```yaml
//! leader: "<leader>"
//! mappings:
//!   - key: s
//!     rhs: write
//!     desc: Save file
//!     modes: n
//!     as: cmd
//!   - key: p
//!     rhs: Files
//!     desc: Find files
//!     mods: [ctrl]
//! ```
//!
//! Entries feed through the normal builder path, so labels, validation, and
//! modifier merging behave exactly as with code-declared mappings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MapError;
use crate::mapping::Spec;
use crate::mapset::MapSet;
use crate::modifiers::{ModSet, Modifier};
use crate::options::MapOpts;
use crate::rhs::{Rhs, Wrap};

const APP_DIR: &str = "bindery";

/// Root structure of a mappings YAML file
#[derive(Debug, Deserialize)]
pub struct MappingsConfig {
    /// Leader token override for the whole file
    #[serde(default)]
    pub leader: Option<String>,
    pub mappings: Vec<MappingEntry>,
}

/// A single declaration entry from YAML
#[derive(Debug, Deserialize)]
pub struct MappingEntry {
    pub key: String,
    /// Absent rhs means a display-only entry
    #[serde(default)]
    pub rhs: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub modes: Option<String>,
    #[serde(default)]
    pub remap: Option<bool>,
    #[serde(default)]
    pub silent: Option<bool>,
    #[serde(default, rename = "as")]
    pub wrap: Option<Wrap>,
    #[serde(default)]
    pub plug: Option<String>,
    #[serde(default)]
    pub mods: Vec<Modifier>,
}

impl MappingEntry {
    fn options(&self) -> MapOpts {
        MapOpts {
            modes: self.modes.clone(),
            remap: self.remap,
            silent: self.silent,
            wrap: self.wrap,
            plug: self.plug.clone(),
            mods: self.mods.iter().copied().collect::<ModSet>(),
        }
    }
}

impl MappingsConfig {
    /// Feed every entry into `maps` through the normal builder path.
    ///
    /// Returns the number of declarations appended. Fails on the first
    /// malformed entry, leaving earlier entries in place.
    pub fn apply(&self, maps: &mut MapSet) -> Result<usize, MapError> {
        if let Some(leader) = &self.leader {
            maps.set_leader(leader.clone());
        }

        for entry in &self.mappings {
            if let Some(desc) = &entry.desc {
                maps.desc(desc);
            }
            let rhs = Rhs::Str(entry.rhs.clone().unwrap_or_default());
            maps.set(&entry.key, Spec::new(rhs, entry.options()))?;
        }

        tracing::info!("applied {} mapping entries from config", self.mappings.len());
        Ok(self.mappings.len())
    }
}

/// Parse a mappings YAML string
pub fn parse_mappings_yaml(yaml: &str) -> Result<MappingsConfig, MapError> {
    serde_yaml::from_str(yaml).map_err(|e| MapError::ParseError(e.to_string()))
}

/// Load a mappings YAML file
pub fn load_mappings_file(path: &Path) -> Result<MappingsConfig, MapError> {
    let content = std::fs::read_to_string(path).map_err(|e| MapError::IoError(e.to_string()))?;
    parse_mappings_yaml(&content)
}

/// The user's mappings file path
///
/// Returns `~/.config/bindery/mappings.yaml` on Unix,
/// `%APPDATA%\bindery\mappings.yaml` on Windows.
pub fn user_mappings_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR).join("mappings.yaml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::config_dir().map(|config| config.join(APP_DIR).join("mappings.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_entry() {
        let yaml = r#"
mappings:
  - key: s
    rhs: write
"#;
        let config = parse_mappings_yaml(yaml).unwrap();
        assert_eq!(config.mappings.len(), 1);
        assert_eq!(config.mappings[0].key, "s");
        assert_eq!(config.mappings[0].rhs.as_deref(), Some("write"));
        assert!(config.leader.is_none());
    }

    #[test]
    fn test_parse_full_entry() {
        let yaml = r#"
leader: ","
mappings:
  - key: f
    rhs: Files
    desc: Find files
    modes: nv
    remap: false
    silent: true
    as: cmd
    mods: [ctrl, shift]
"#;
        let config = parse_mappings_yaml(yaml).unwrap();
        let entry = &config.mappings[0];

        assert_eq!(config.leader.as_deref(), Some(","));
        assert_eq!(entry.wrap, Some(Wrap::Cmd));
        let opts = entry.options();
        assert!(opts.mods.ctrl());
        assert!(opts.mods.shift());
        assert_eq!(opts.modes.as_deref(), Some("nv"));
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        assert!(matches!(
            parse_mappings_yaml("mappings: 12"),
            Err(MapError::ParseError(_))
        ));
    }

    #[test]
    fn test_apply_feeds_builder_path() {
        let yaml = r#"
mappings:
  - key: s
    rhs: write
    desc: Save
  - key: q
    rhs: quit
"#;
        let config = parse_mappings_yaml(yaml).unwrap();
        let mut maps = MapSet::new();
        let count = config.apply(&mut maps).unwrap();

        assert_eq!(count, 2);
        let labels: Vec<_> = maps.mappings().map(|m| m.label.clone()).collect();
        assert_eq!(labels, vec![Some("Save".to_string()), None]);
    }

    #[test]
    fn test_apply_sets_leader() {
        let yaml = r#"
leader: ","
mappings: []
"#;
        let mut maps = MapSet::new();
        parse_mappings_yaml(yaml).unwrap().apply(&mut maps).unwrap();
        assert_eq!(maps.leader_token(), ",");
    }

    #[test]
    fn test_apply_rejects_bad_mode_naming_key() {
        let yaml = r#"
mappings:
  - key: s
    rhs: write
    modes: q
"#;
        let mut maps = MapSet::new();
        let err = parse_mappings_yaml(yaml)
            .unwrap()
            .apply(&mut maps)
            .unwrap_err();
        assert!(format!("{}", err).contains("'s'"));
    }

    #[test]
    fn test_user_mappings_path_shape() {
        if let Some(path) = user_mappings_path() {
            assert!(path.to_string_lossy().ends_with("mappings.yaml"));
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }
}
