//! I/O helpers for university commands.

pub mod config;
pub mod roster;
