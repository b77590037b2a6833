#![deny(missing_docs)]

//! An in-memory multi-value dictionary library with an interactive
//! command shell.
//!
//! Each key maps to a set of unique string members. Keys are created
//! implicitly on first add and removed implicitly when their last
//! member is removed. The [`Shell`] drives the store over a
//! line-oriented command protocol.

mod command;
mod error;
mod shell;
mod store;

pub use command::Command;
pub use error::{MvError, Result};
pub use shell::{Shell, DEFAULT_PROMPT};
pub use store::MultiValueStore;
