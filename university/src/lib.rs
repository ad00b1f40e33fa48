//! Campus person records and the `university` CLI.
//!
//! The crate keeps a strict split:
//!
//! - **[`core`]**: Pure record types ([`core::person::Person`] and its student,
//!   lecturer and staff variants) plus the [`core::person::Profile`] rendering
//!   contract. No I/O.
//! - **[`io`]**: Config and roster loading from disk.
//!
//! Command modules ([`demo`], [`show`]) combine the two for the CLI.

pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod show;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
