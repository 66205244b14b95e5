//! Command implementations for the `dashlay` CLI.
//!
//! Organized by domain:
//! - `config` - configuration file management (init, path, validate)
//! - `layout` - run the layout pipeline against stored preferences
//! - `store` - inspect and clear stored preferences (show, reset)

pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod store;

pub(crate) use config::*;
pub(crate) use layout::*;
pub(crate) use store::*;
