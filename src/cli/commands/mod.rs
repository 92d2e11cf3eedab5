//! Subcommands of the `linemark` binary

pub mod decide;
pub mod inspect;
