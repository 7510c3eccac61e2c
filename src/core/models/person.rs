//! Shared identity fields and role dispatch for students and instructors.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Instructor, Student};

/// Identity fields common to every person kind.
///
/// `id` and `reg_no` are immutable once constructed; the mutable fields
/// refresh `updated_at` through their setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCore {
    id: String,
    reg_no: String,
    full_name: String,
    email: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl PersonCore {
    /// Create a new person identity.
    #[must_use]
    pub fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        let now = Local::now().naive_local();
        Self {
            id,
            reg_no,
            full_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// System-assigned identifier (immutable).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Externally-assigned registration number (immutable).
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Replace the full name and refresh `updated_at`.
    pub fn set_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
        self.touch();
    }

    /// Replace the email and refresh `updated_at`.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }
}

/// Person kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// An enrolled student.
    Student,
    /// A course instructor.
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "STUDENT"),
            Self::Instructor => write!(f, "INSTRUCTOR"),
        }
    }
}

/// Borrowed view over either person kind, used where behavior depends on the
/// role tag (profile rendering, one-line listings).
#[derive(Debug, Clone, Copy)]
pub enum Person<'a> {
    /// Student variant.
    Student(&'a Student),
    /// Instructor variant.
    Instructor(&'a Instructor),
}

impl Person<'_> {
    /// The role tag for this person.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Instructor(_) => Role::Instructor,
        }
    }

    /// Shared identity fields.
    #[must_use]
    pub const fn core(&self) -> &PersonCore {
        match self {
            Self::Student(s) => s.person(),
            Self::Instructor(i) => i.person(),
        }
    }

    /// Multi-line profile text with role-specific fields.
    #[must_use]
    pub fn detailed_profile(&self) -> String {
        match self {
            Self::Student(s) => s.detailed_profile(),
            Self::Instructor(i) => i.detailed_profile(),
        }
    }
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core();
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.role(),
            core.full_name(),
            core.reg_no(),
            core.email()
        )
    }
}
