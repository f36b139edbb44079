//! Road network CLI library.
//!
//! Terminal styling and output formatting shared by the `roadnet-cli`
//! subcommands.

pub mod output;
pub mod terminal;
