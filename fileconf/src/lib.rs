//! File-based configuration with environment variable overrides
//!
//! `fileconf` loads a config struct from a YAML or JSON file and then lets
//! environment variables override any of its leaf fields. Variable names are
//! derived from the struct's shape, so no per-field mapping has to be written.
//!
//! # Features
//!
//! - **Two sources, one struct**: file values first, environment second
//! - **Declarative**: field walking is generated with `#[derive(Overlay)]`
//! - **Structural names**: nested structs and sequences map to `OUTER_INNER_0_LEAF`
//! - **Best effort**: environment values that do not parse are ignored
//! - **Testable**: the environment can be swapped for any [`EnvSource`]
//!
//! # File Formats
//!
//! The file name suffix selects the format:
//! - `.yml`: YAML via `serde_yaml`
//! - `.json`: JSON via `serde_json`
//!
//! Any other suffix is rejected with [`ConfigError::UnsupportedFormat`].
//! Keys match field names exactly, as serde does (including `#[serde(rename)]`).
//!
//! # Variable Names
//!
//! Each field contributes its uppercased name; sequence elements contribute
//! their index; segments are joined with `_`:
//!
//! | Field                       | Variable              |
//! |-----------------------------|-----------------------|
//! | `port`                      | `PORT`                |
//! | `database.host`             | `DATABASE_HOST`       |
//! | `servers[1].name`           | `SERVERS_1_NAME`      |
//!
//! Integers and floats are parsed with `FromStr`, so hexadecimal floats such
//! as `0x1p-2` do not parse and are ignored; booleans accept
//! `1`, `t`, `T`, `TRUE`, `true`, `True` and the matching false forms;
//! strings are taken verbatim. An empty variable counts as unset.
//!
//! # Example
//!
//! ```rust
//! use fileconf::Overlay;
//! use serde::Deserialize;
//! # use std::io::Write;
//!
//! #[derive(Debug, Deserialize, Overlay)]
//! struct Database {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Debug, Deserialize, Overlay)]
//! struct Config {
//!     port: u16,
//!     database: Database,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! # let mut file = tempfile::Builder::new().suffix(".yml").tempfile()?;
//! # writeln!(file, "port: 8080\ndatabase:\n  host: db1\n  port: 5432")?;
//! # let path = file.path();
//! #     std::env::set_var("DATABASE_PORT", "5433");
//! let config: Config = fileconf::load(path)?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.database.host, "db1");
//! assert_eq!(config.database.port, 5433);
//! #     std::env::remove_var("DATABASE_PORT");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[overlay(name = "NAME")]`
//!
//! Use a different name for the field's segment. It is uppercased like any
//! other field name.
//!
//! ```rust
//! # use fileconf::Overlay;
//! #[derive(Overlay)]
//! struct Config {
//!     // Read from LISTEN
//!     #[overlay(name = "listen")]
//!     bind_address: String,
//! }
//! ```
//!
//! ## `#[overlay(skip)]`
//!
//! Keep a field out of the environment walk entirely.
//!
//! ```rust
//! # use fileconf::Overlay;
//! #[derive(Overlay)]
//! struct Config {
//!     #[overlay(skip)]
//!     build_id: String,
//! }
//! ```

extern crate self as fileconf;

mod env;
mod error;
mod load;
mod node;
mod overlay;

pub use env::{EnvSource, FnEnv, ProcessEnv};
pub use error::{ConfigError, DeserializeError};
pub use fileconf_derive::Overlay;
pub use load::{get_config, get_config_with, load, load_with, Format};
pub use node::{Field, Node, Overlay, Scalar};
pub use overlay::{overlay, overlay_env};
