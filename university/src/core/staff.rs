//! Staff records.

use std::fmt;

use serde::Serialize;

use crate::core::person::{Person, Profile, Role};

/// A staff record. Only the position changes after construction:
///
/// ```compile_fail
/// use university::core::staff::Staff;
///
/// let mut staff = Staff::new("Emma Wilson", 35, "emma@uni.edu", "ST30001", "Administrator", "Registrar's Office");
/// staff.employee_id = "ST99999".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    #[serde(flatten)]
    person: Person,
    employee_id: String,
    position: String,
    department: String,
}

impl Staff {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        employee_id: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::with_role(name, age, email, Role::Staff),
            employee_id: employee_id.into(),
            position: position.into(),
            department: department.into(),
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

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Replace the current position.
    pub fn update_position(&mut self, new_position: impl Into<String>) -> String {
        self.position = new_position.into();
        format!("Position updated to: {}", self.position)
    }
}

impl Profile for Staff {
    fn describe(&self) -> String {
        format!(
            "{}\nProfessional Information:\nEmployee ID: {}\nPosition: {}\nDepartment: {}\n",
            self.person.describe(),
            self.employee_id,
            self.position,
            self.department
        )
    }

    fn to_label(&self) -> String {
        format!("{} | Position: {}", self.person.to_label(), self.position)
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}
