//! Roster model

use super::Student;
use serde::{Deserialize, Serialize};

/// A class (halaqa) and its students
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Class name
    pub class_name: String,

    /// Teacher responsible for the class
    pub teacher: Option<String>,

    /// Students in roster order
    pub students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    ///
    /// # Arguments
    /// * `class_name` - Class name
    #[must_use]
    pub const fn new(class_name: String) -> Self {
        Self {
            class_name,
            teacher: None,
            students: Vec::new(),
        }
    }

    /// Add a student to the roster
    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Find a student by name (case-insensitive)
    #[must_use]
    pub fn get_student(&self, name: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Number of students with a recorded position
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.students
            .iter()
            .filter(|s| s.memorized.is_some())
            .count()
    }
}
