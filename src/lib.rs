//! docsconf - documentation build configuration for dobi.
//!
//! The rendering engine consumes [`config::BuildConfiguration`]; the
//! `docsconf` binary wraps it with `show`, `check`, `init` and `themes`.

pub mod cli;
pub mod config;
pub mod logger;
