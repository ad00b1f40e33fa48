//! Base person record and the rendering contract shared by every variant.

use std::fmt;

use serde::Serialize;

/// Fixed role tag carried by each record kind.
///
/// Set once by the constructor of the record that owns it; calling code can
/// read it but never assign it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Generic,
    Student,
    Lecturer,
    Staff,
}

impl Role {
    /// Human-readable label used in rendered text.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Generic => "Generic Person",
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Staff => "Staff Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rendering capabilities required of every record.
pub trait Profile {
    /// Multi-line information block.
    fn describe(&self) -> String;

    /// One-line summary, e.g. `Student: Alice Johnson (20) | Major: Computer Science`.
    fn to_label(&self) -> String;
}

/// Base record. Name, age, email and role are read-only after construction:
///
/// ```compile_fail
/// use university::core::person::Person;
///
/// let mut person = Person::new("John Doe", 30, "john.doe@example.com");
/// person.name = "Jane Doe".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: u32,
    email: String,
    role: Role,
}

impl Person {
    /// Create a person with the generic role.
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self::with_role(name, age, email, Role::Generic)
    }

    /// Only variant constructors pick a non-generic role.
    pub(crate) fn with_role(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Profile for Person {
    fn describe(&self) -> String {
        format!(
            "{} Information:\nName: {}\nAge: {}\nEmail: {}\n",
            self.role, self.name, self.age, self.email
        )
    }

    fn to_label(&self) -> String {
        format!("{}: {} ({})", self.role, self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

/// Join `items` with `", "`, or `None` when empty.
pub(crate) fn join_or_none<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect();
    if parts.is_empty() {
        return "None".to_string();
    }
    parts.join(", ")
}
