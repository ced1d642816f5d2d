//! DevStart Core - library behind the `devstart` scaffolding CLI
//!
//! This library turns a stack interview (framework, styling, UI kit, state,
//! data fetching, database, auth, extra tools) into a ready-to-run project
//! skeleton: files, a deterministic package.json, an env template, and
//! optional git/install shell-outs.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Decision tables** - [`stack`] maps every choice to packages,
//!   scripts, and env vars; [`manifest`] composes package.json from them
//! - **Layer 2: Materialization** - [`generate`] writes the skeleton,
//!   [`install`] runs the package manager and git, [`validate`] guards inputs
//! - **Layer 3: CLI/TUI Interface** - cliclack-based interview (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interview module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use devstart_core::{manifest::PackageManifest, stack::StackConfig};
//!
//! let config = StackConfig::defaults("my-app");
//! let package_json = PackageManifest::compose(&config).to_json();
//! ```

pub mod generate;
pub mod install;
pub mod manifest;
pub mod stack;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use generate::generate_project;
pub use install::PackageManager;
pub use manifest::PackageManifest;
pub use stack::{
    Auth, Database, DataFetching, ExtraTool, Framework, StackConfig, StateManagement, Styling,
    UiKit,
};
pub use validate::{validate_project_name, validate_project_path, ValidationError};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
