//! Deterministic, pure logic for campus records.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic text suitable for tests.

pub mod lecturer;
pub mod member;
pub mod person;
pub mod staff;
pub mod student;
