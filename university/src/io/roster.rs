//! Roster files: TOML lists of records to construct for display.
//!
//! A roster supplies identity fields and the operations to replay. Roles are
//! never read from the file; each entry is built through its record's
//! constructor, and courses / office hours go through `enroll` /
//! `add_office_hours` so the record invariants hold.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::core::lecturer::{Lecturer, OfficeHours};
use crate::core::member::Member;
use crate::core::person::Person;
use crate::core::staff::Staff;
use crate::core::student::Student;

/// Parsed roster file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RosterFile {
    #[serde(default, rename = "member")]
    pub members: Vec<MemberEntry>,
}

/// One `[[member]]` table, discriminated by `kind`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberEntry {
    Person {
        name: String,
        age: u32,
        email: String,
    },
    Student {
        name: String,
        age: u32,
        email: String,
        student_id: String,
        major: String,
        year: u32,
        #[serde(default)]
        courses: Vec<String>,
    },
    Lecturer {
        name: String,
        age: u32,
        email: String,
        employee_id: String,
        department: String,
        #[serde(default)]
        courses_taught: Vec<String>,
        #[serde(default)]
        office_hours: Vec<OfficeHours>,
    },
    Staff {
        name: String,
        age: u32,
        email: String,
        employee_id: String,
        position: String,
        department: String,
    },
}

impl MemberEntry {
    /// Construct the record and replay its operations.
    pub fn build(self) -> Member {
        match self {
            MemberEntry::Person { name, age, email } => Person::new(name, age, email).into(),
            MemberEntry::Student {
                name,
                age,
                email,
                student_id,
                major,
                year,
                courses,
            } => {
                let mut student = Student::new(name, age, email, student_id, major, year);
                for course in courses {
                    student.enroll(course);
                }
                student.into()
            }
            MemberEntry::Lecturer {
                name,
                age,
                email,
                employee_id,
                department,
                courses_taught,
                office_hours,
            } => {
                let mut lecturer =
                    Lecturer::new(name, age, email, employee_id, department, courses_taught);
                for slot in office_hours {
                    lecturer.add_office_hours(slot.day, slot.time);
                }
                lecturer.into()
            }
            MemberEntry::Staff {
                name,
                age,
                email,
                employee_id,
                position,
                department,
            } => Staff::new(name, age, email, employee_id, position, department).into(),
        }
    }
}

impl RosterFile {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("parse roster toml")
    }

    pub fn build(self) -> Vec<Member> {
        self.members.into_iter().map(MemberEntry::build).collect()
    }
}

/// Load a roster from disk and build its records in file order.
pub fn load_roster(path: &Path) -> Result<Vec<Member>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read roster {}", path.display()))?;
    let roster = RosterFile::parse(&contents)
        .with_context(|| format!("load roster {}", path.display()))?;
    let members = roster.build();
    debug!(path = %path.display(), members = members.len(), "roster loaded");
    Ok(members)
}
