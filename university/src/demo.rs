//! Scripted walkthrough for `university demo`.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::lecturer::Lecturer;
use crate::core::person::Profile;
use crate::core::staff::Staff;
use crate::core::student::Student;
use crate::io::config::CampusConfig;

/// Records used by the demonstration, before any operation is applied.
pub struct Cast {
    pub student: Student,
    pub lecturer: Lecturer,
    pub staff: Staff,
}

pub fn cast() -> Cast {
    Cast {
        student: Student::new(
            "Alice Johnson",
            20,
            "alice.johnson@university.edu",
            "S10001",
            "Computer Science",
            2,
        ),
        lecturer: Lecturer::new(
            "Dr. Robert Smith",
            45,
            "r.smith@university.edu",
            "L20001",
            "Computer Science",
            vec!["CS101".to_string(), "CS202".to_string(), "CS305".to_string()],
        ),
        staff: Staff::new(
            "Emma Wilson",
            32,
            "e.wilson@university.edu",
            "ST30001",
            "Administrative Assistant",
            "Registrar's Office",
        ),
    }
}

/// Apply the demonstration operations and print every record.
///
/// Returns the mutated cast so callers can inspect the final state.
pub fn run_demo<W: Write>(out: &mut W, cfg: &CampusConfig) -> Result<Cast> {
    let mut cast = cast();
    info!("running university demonstration");

    writeln!(out)?;
    writeln!(out, "University System Demonstration")?;
    writeln!(out, "{}", "=".repeat(cfg.banner_width))?;
    writeln!(out)?;

    writeln!(out, "Student Operations:")?;
    for course in ["CS101", "MATH201", "CS101"] {
        writeln!(out, "{}", cast.student.enroll(course))?;
    }
    writeln!(out)?;

    writeln!(out, "Lecturer Operations:")?;
    writeln!(
        out,
        "{}",
        cast.lecturer.add_office_hours("Monday", "2:00 PM - 4:00 PM")
    )?;
    writeln!(
        out,
        "{}",
        cast.lecturer
            .add_office_hours("Wednesday", "10:00 AM - 12:00 PM")
    )?;
    writeln!(out)?;

    writeln!(out, "Staff Operations:")?;
    writeln!(
        out,
        "{}",
        cast.staff.update_position("Senior Administrative Assistant")
    )?;
    writeln!(out)?;

    write_section(out, "Student Information:", &cast.student)?;
    writeln!(out)?;
    write_section(out, "Lecturer Information:", &cast.lecturer)?;
    writeln!(out)?;
    write_section(out, "Staff Information:", &cast.staff)?;
    out.flush().context("flush demonstration output")?;
    Ok(cast)
}

fn write_section<W: Write, P: Profile>(out: &mut W, heading: &str, record: &P) -> Result<()> {
    writeln!(out, "{}", heading)?;
    write!(out, "{}", record.describe())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cfg: &CampusConfig) -> (String, Cast) {
        let mut buf = Vec::new();
        let cast = run_demo(&mut buf, cfg).expect("demo");
        (String::from_utf8(buf).expect("utf8"), cast)
    }

    #[test]
    fn demo_reports_each_operation() {
        let (output, _) = run(&CampusConfig::default());
        let expected = "\
Student Operations:
Enrolled in CS101
Enrolled in MATH201
Already enrolled in CS101

Lecturer Operations:
Added office hours: Monday at 2:00 PM - 4:00 PM
Added office hours: Wednesday at 10:00 AM - 12:00 PM

Staff Operations:
Position updated to: Senior Administrative Assistant
";
        assert!(output.contains(expected), "output:\n{}", output);
    }

    #[test]
    fn demo_leaves_records_mutated() {
        let (output, cast) = run(&CampusConfig::default());
        assert_eq!(cast.student.courses(), ["CS101", "MATH201"]);
        assert_eq!(cast.lecturer.office_hours().len(), 2);
        assert_eq!(cast.staff.position(), "Senior Administrative Assistant");
        assert!(output.contains("Courses: CS101, MATH201\n"));
        assert!(output.contains("Courses Taught: CS101, CS202, CS305\n"));
        assert!(output.ends_with("Department: Registrar's Office\n"));
    }

    #[test]
    fn banner_width_follows_config() {
        let cfg = CampusConfig {
            banner_width: 8,
            ..CampusConfig::default()
        };
        let (output, _) = run(&cfg);
        assert!(output.starts_with("\nUniversity System Demonstration\n========\n\n"));
    }
}
