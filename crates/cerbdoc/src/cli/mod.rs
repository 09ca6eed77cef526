//! Subcommand implementations for the cerbdoc CLI.

pub mod check;
pub mod index;
pub mod search;
pub mod symbols;
pub mod tokens;
