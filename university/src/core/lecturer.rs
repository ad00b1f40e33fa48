//! Lecturer records and office hours.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::person::{Person, Profile, Role, join_or_none};

/// One office-hours slot, e.g. `Monday` / `2-4 PM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub day: String,
    pub time: String,
}

impl OfficeHours {
    pub fn new(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for OfficeHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// A lecturer record. Identity fields are fixed at construction:
///
/// ```compile_fail
/// use university::core::lecturer::Lecturer;
///
/// let mut lecturer = Lecturer::new("Dr. Smith", 45, "smith@uni.edu", "L20001", "Computer Science", Vec::new());
/// lecturer.department = "Physics".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lecturer {
    #[serde(flatten)]
    person: Person,
    employee_id: String,
    department: String,
    courses_taught: Vec<String>,
    office_hours: Vec<OfficeHours>,
}

impl Lecturer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        employee_id: impl Into<String>,
        department: impl Into<String>,
        courses_taught: Vec<String>,
    ) -> Self {
        Self {
            person: Person::with_role(name, age, email, Role::Lecturer),
            employee_id: employee_id.into(),
            department: department.into(),
            courses_taught,
            office_hours: Vec::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn courses_taught(&self) -> &[String] {
        &self.courses_taught
    }

    pub fn office_hours(&self) -> &[OfficeHours] {
        &self.office_hours
    }

    /// Append an office-hours slot. Identical slots are kept.
    pub fn add_office_hours(
        &mut self,
        day: impl Into<String>,
        time: impl Into<String>,
    ) -> String {
        let slot = OfficeHours::new(day, time);
        let message = format!("Added office hours: {} at {}", slot.day, slot.time);
        self.office_hours.push(slot);
        message
    }
}

impl Profile for Lecturer {
    fn describe(&self) -> String {
        let hours = join_or_none(self.office_hours.iter().map(ToString::to_string));
        format!(
            "{}\nProfessional Information:\nEmployee ID: {}\nDepartment: {}\nCourses Taught: {}\nOffice Hours: {}\n",
            self.person.describe(),
            self.employee_id,
            self.department,
            self.courses_taught.join(", "),
            hours
        )
    }

    fn to_label(&self) -> String {
        format!("{} | Department: {}", self.person.to_label(), self.department)
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::dr_smith;

    #[test]
    fn new_lecturer_has_no_office_hours() {
        let lecturer = dr_smith();
        assert_eq!(lecturer.person().name(), "Dr. Smith");
        assert_eq!(lecturer.employee_id(), "L20001");
        assert_eq!(lecturer.department(), "Computer Science");
        assert_eq!(lecturer.courses_taught(), ["CS101", "CS202"]);
        assert_eq!(lecturer.person().role(), Role::Lecturer);
        assert!(lecturer.office_hours().is_empty());
    }

    #[test]
    fn add_office_hours_confirms_slot() {
        let mut lecturer = dr_smith();
        let message = lecturer.add_office_hours("Monday", "2-4 PM");
        assert_eq!(message, "Added office hours: Monday at 2-4 PM");
        assert!(
            lecturer
                .office_hours()
                .contains(&OfficeHours::new("Monday", "2-4 PM"))
        );
    }

    #[test]
    fn add_office_hours_keeps_duplicates() {
        let mut lecturer = dr_smith();
        lecturer.add_office_hours("Monday", "2-4 PM");
        lecturer.add_office_hours("Monday", "2-4 PM");
        assert_eq!(
            lecturer.office_hours(),
            [
                OfficeHours::new("Monday", "2-4 PM"),
                OfficeHours::new("Monday", "2-4 PM"),
            ]
        );
    }

    #[test]
    fn describe_lists_courses_and_hours() {
        let mut lecturer = dr_smith();
        assert!(lecturer.describe().contains("Office Hours: None\n"));

        lecturer.add_office_hours("Monday", "2-4 PM");
        lecturer.add_office_hours("Friday", "9-10 AM");
        let block = lecturer.describe();
        assert!(block.starts_with("Lecturer Information:\n"));
        assert!(block.contains("Courses Taught: CS101, CS202\n"));
        assert!(block.contains("Office Hours: Monday 2-4 PM, Friday 9-10 AM\n"));
    }

    #[test]
    fn label_appends_department() {
        assert_eq!(
            dr_smith().to_label(),
            "Lecturer: Dr. Smith (45) | Department: Computer Science"
        );
    }
}
