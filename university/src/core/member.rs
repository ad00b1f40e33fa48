//! Heterogeneous record wrapper used by rosters and CLI output.

use std::fmt;

use serde::Serialize;

use crate::core::lecturer::Lecturer;
use crate::core::person::{Person, Profile, Role};
use crate::core::staff::Staff;
use crate::core::student::Student;

/// Any record kind, tagged by `kind` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Person(Person),
    Student(Student),
    Lecturer(Lecturer),
    Staff(Staff),
}

impl Member {
    pub fn person(&self) -> &Person {
        match self {
            Member::Person(person) => person,
            Member::Student(student) => student.person(),
            Member::Lecturer(lecturer) => lecturer.person(),
            Member::Staff(staff) => staff.person(),
        }
    }

    pub fn role(&self) -> Role {
        self.person().role()
    }
}

impl Profile for Member {
    fn describe(&self) -> String {
        match self {
            Member::Person(person) => person.describe(),
            Member::Student(student) => student.describe(),
            Member::Lecturer(lecturer) => lecturer.describe(),
            Member::Staff(staff) => staff.describe(),
        }
    }

    fn to_label(&self) -> String {
        match self {
            Member::Person(person) => person.to_label(),
            Member::Student(student) => student.to_label(),
            Member::Lecturer(lecturer) => lecturer.to_label(),
            Member::Staff(staff) => staff.to_label(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

impl From<Person> for Member {
    fn from(person: Person) -> Self {
        Member::Person(person)
    }
}

impl From<Student> for Member {
    fn from(student: Student) -> Self {
        Member::Student(student)
    }
}

impl From<Lecturer> for Member {
    fn from(lecturer: Lecturer) -> Self {
        Member::Lecturer(lecturer)
    }
}

impl From<Staff> for Member {
    fn from(staff: Staff) -> Self {
        Member::Staff(staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alice, dr_smith, emma};

    #[test]
    fn dispatches_to_variant_rendering() {
        let members: Vec<Member> = vec![alice().into(), dr_smith().into(), emma().into()];
        let roles: Vec<Role> = members.iter().map(Member::role).collect();
        assert_eq!(roles, vec![Role::Student, Role::Lecturer, Role::Staff]);

        assert_eq!(members[0].to_label(), alice().to_label());
        assert_eq!(members[1].describe(), dr_smith().describe());
        assert_eq!(members[2].to_string(), emma().to_string());
    }

    #[test]
    fn serializes_with_kind_tag_and_role() {
        let member = Member::from(alice());
        let value = serde_json::to_value(&member).expect("serialize");
        assert_eq!(value["kind"], "student");
        assert_eq!(value["role"], "student");
        assert_eq!(value["name"], "Alice Johnson");
        assert_eq!(value["courses"], serde_json::json!([]));
    }
}
