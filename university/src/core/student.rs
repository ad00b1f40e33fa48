//! Student records and course enrollment.

use std::fmt;

use serde::Serialize;

use crate::core::person::{Person, Profile, Role, join_or_none};

/// Result of [`Student::enroll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrollment {
    /// Course was appended to the enrollment list.
    Enrolled(String),
    /// Course was already present; nothing changed.
    AlreadyEnrolled(String),
}

impl Enrollment {
    pub fn is_new(&self) -> bool {
        matches!(self, Enrollment::Enrolled(_))
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enrollment::Enrolled(code) => write!(f, "Enrolled in {}", code),
            Enrollment::AlreadyEnrolled(code) => write!(f, "Already enrolled in {}", code),
        }
    }
}

/// A student record. Identity fields are fixed at construction:
///
/// ```compile_fail
/// use university::core::student::Student;
///
/// let mut student = Student::new("Alice Johnson", 20, "alice@uni.edu", "S10001", "Computer Science", 2);
/// student.major = "Law".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    student_id: String,
    major: String,
    year: u32,
    courses: Vec<String>,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        student_id: impl Into<String>,
        major: impl Into<String>,
        year: u32,
    ) -> Self {
        Self {
            person: Person::with_role(name, age, email, Role::Student),
            student_id: student_id.into(),
            major: major.into(),
            year,
            courses: Vec::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Enrolled course codes in enrollment order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Add `course_code` unless already enrolled. Applying the same code
    /// again leaves the list unchanged.
    pub fn enroll(&mut self, course_code: impl Into<String>) -> Enrollment {
        let code = course_code.into();
        if self.courses.contains(&code) {
            return Enrollment::AlreadyEnrolled(code);
        }
        self.courses.push(code.clone());
        Enrollment::Enrolled(code)
    }
}

impl Profile for Student {
    fn describe(&self) -> String {
        format!(
            "{}\nAcademic Information:\nStudent ID: {}\nMajor: {}\nYear: {}\nCourses: {}\n",
            self.person.describe(),
            self.student_id,
            self.major,
            self.year,
            join_or_none(&self.courses)
        )
    }

    fn to_label(&self) -> String {
        format!("{} | Major: {}", self.person.to_label(), self.major)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::alice;

    #[test]
    fn new_student_starts_without_courses() {
        let student = alice();
        assert_eq!(student.person().name(), "Alice Johnson");
        assert_eq!(student.student_id(), "S10001");
        assert_eq!(student.major(), "Computer Science");
        assert_eq!(student.year(), 2);
        assert_eq!(student.person().role(), Role::Student);
        assert!(student.courses().is_empty());
    }

    #[test]
    fn enroll_rejects_duplicate_course() {
        let mut student = alice();

        let first = student.enroll("CS101");
        assert_eq!(first.to_string(), "Enrolled in CS101");
        assert_eq!(student.courses(), ["CS101"]);

        let second = student.enroll("CS101");
        assert_eq!(second.to_string(), "Already enrolled in CS101");
        assert_ne!(first, second);
        assert!(!second.is_new());
        assert_eq!(student.courses(), ["CS101"]);
    }

    #[test]
    fn enroll_preserves_insertion_order() {
        let mut student = alice();
        student.enroll("MATH201");
        student.enroll("CS101");
        student.enroll("MATH201");
        student.enroll("PHYS110");
        assert_eq!(student.courses(), ["MATH201", "CS101", "PHYS110"]);
    }

    #[test]
    fn label_appends_major() {
        let student = alice();
        assert_eq!(student.person().to_label(), "Student: Alice Johnson (20)");
        assert_eq!(
            student.to_label(),
            "Student: Alice Johnson (20) | Major: Computer Science"
        );
    }

    #[test]
    fn describe_extends_base_block() {
        let mut student = alice();
        let empty = student.describe();
        assert!(empty.starts_with(&student.person().describe()));
        assert!(empty.contains("Student Information:\n"));
        assert!(empty.contains("Courses: None\n"));

        student.enroll("CS101");
        student.enroll("MATH201");
        let block = student.describe();
        assert!(block.contains("Academic Information:\nStudent ID: S10001\n"));
        assert!(block.contains("Courses: CS101, MATH201\n"));
    }
}
