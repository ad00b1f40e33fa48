//! Test-only helpers for constructing campus records.

use crate::core::lecturer::Lecturer;
use crate::core::staff::Staff;
use crate::core::student::Student;

/// Deterministic second-year computer science student with no courses.
pub fn alice() -> Student {
    Student::new(
        "Alice Johnson",
        20,
        "alice@uni.edu",
        "S10001",
        "Computer Science",
        2,
    )
}

/// Deterministic lecturer teaching CS101 and CS202, no office hours.
pub fn dr_smith() -> Lecturer {
    Lecturer::new(
        "Dr. Smith",
        45,
        "smith@uni.edu",
        "L20001",
        "Computer Science",
        vec!["CS101".to_string(), "CS202".to_string()],
    )
}

/// Deterministic staff member in the registrar's office.
pub fn emma() -> Staff {
    Staff::new(
        "Emma Wilson",
        35,
        "emma@uni.edu",
        "ST30001",
        "Administrator",
        "Registrar's Office",
    )
}

/// Write `contents` as `roster.toml` inside a fresh temp dir.
pub fn roster_fixture(contents: &str) -> anyhow::Result<(tempfile::TempDir, std::path::PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("roster.toml");
    std::fs::write(&path, contents)?;
    Ok((temp, path))
}
