//! Declarative keymap registration layer
//!
//! This crate provides a builder-style syntax for declaring keyboard
//! mappings, deferring their registration so groups of pending declarations
//! can be mutated in batch before they are translated into the flat option
//! records a registration backend expects:
//!
//! ```text
//! desc()/set()/ctrl()… → MapSet → split() per group → register() → Registrar
//! ```
//!
//! # Declaring mappings
//!
//! ```
//! use bindery::{MapOpts, MapSet, Recorder, Wrap};
//!
//! let mut maps = MapSet::new();
//!
//! // label, then key/action
//! maps.desc("Save file")
//!     .set("s", ("write", MapOpts::new().wrap(Wrap::Cmd)))?;
//!
//! // modifier-qualified entry points
//! maps.desc("Command palette");
//! maps.ctrl().shift().set("p", "Telescope commands")?;
//!
//! // group override, then flush everything
//! maps.split(&MapOpts::new().modes("n"))?;
//! let mut backend = Recorder::new();
//! maps.register(&mut backend, &MapOpts::new().silent(true))?;
//! # Ok::<(), bindery::MapError>(())
//! ```
//!
//! Mappings can also be loaded from YAML via [`config`].

pub mod config;
pub mod error;
pub mod mapping;
pub mod mapset;
pub mod modifiers;
pub mod options;
pub mod registry;
pub mod rhs;

mod translate;

// Re-export commonly used types
pub use config::{load_mappings_file, parse_mappings_yaml, user_mappings_path, MappingsConfig};
pub use error::MapError;
pub use mapping::{Mapping, Spec};
pub use mapset::{MapSet, ModChain, ShiftChain, DEFAULT_LEADER};
pub use modifiers::{ModSet, Modifier};
pub use options::MapOpts;
pub use registry::{MapArgs, Recorder, Registrar};
pub use rhs::{Callback, Rhs, Wrap};
