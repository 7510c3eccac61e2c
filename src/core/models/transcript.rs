//! Immutable transcript snapshot for one student.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Grade;

/// One line of a transcript: a course the student enrolled in, with its
/// grade and marks if recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Course code at enrollment time.
    pub course_code: String,
    /// Course title at generation time.
    pub course_title: String,
    /// Credit hours the course carries.
    pub credits: u32,
    /// Recorded grade, if graded.
    pub grade: Option<Grade>,
    /// Recorded marks, if graded.
    pub marks: Option<f64>,
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade_info = match (self.grade, self.marks) {
            (Some(grade), Some(marks)) => {
                format!("{grade} ({marks:.2}) - {:.1} points", grade.points())
            }
            _ => "Not Graded".to_string(),
        };
        write!(
            f,
            "{:<10} | {:<30} | {} credits | {}",
            self.course_code, self.course_title, self.credits, grade_info
        )
    }
}

/// Point-in-time snapshot of a student's course history with a computed
/// GPA. Built once per request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    student_id: String,
    student_name: String,
    reg_no: String,
    entries: Vec<TranscriptEntry>,
    overall_gpa: f64,
    total_credits: u32,
    generated_at: NaiveDateTime,
}

impl Transcript {
    /// Assemble a snapshot from already-resolved entries. The GPA is a
    /// credit-weighted average over the graded entries only; ungraded
    /// entries contribute nothing to the average but do count toward the
    /// credit total.
    #[must_use]
    pub fn new(
        student_id: String,
        student_name: String,
        reg_no: String,
        entries: Vec<TranscriptEntry>,
    ) -> Self {
        let mut weighted_points = 0.0;
        let mut graded_credits = 0u32;
        for entry in &entries {
            if let Some(grade) = entry.grade {
                weighted_points += grade.points() * f64::from(entry.credits);
                graded_credits += entry.credits;
            }
        }
        let overall_gpa = if graded_credits > 0 {
            weighted_points / f64::from(graded_credits)
        } else {
            0.0
        };
        let total_credits = entries.iter().map(|e| e.credits).sum();

        Self {
            student_id,
            student_name,
            reg_no,
            entries,
            overall_gpa,
            total_credits,
            generated_at: Local::now().naive_local(),
        }
    }

    /// Student the snapshot belongs to.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Student display name at generation time.
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Student registration number.
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Entries in enrollment order.
    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Credit-weighted GPA over graded entries (0.0 when nothing is graded).
    #[must_use]
    pub const fn overall_gpa(&self) -> f64 {
        self.overall_gpa
    }

    /// Sum of credits across all entries, graded or not.
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// Generation timestamp.
    #[must_use]
    pub const fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TRANSCRIPT ===")?;
        writeln!(f, "Student: {}", self.student_name)?;
        writeln!(f, "Registration No: {}", self.reg_no)?;
        writeln!(f, "Generated: {}", self.generated_at)?;
        writeln!(f, "Overall GPA: {:.2}", self.overall_gpa)?;
        writeln!(f, "Total Credits: {}", self.total_credits)?;
        writeln!(f)?;
        writeln!(f, "Course Details:")?;
        writeln!(f, "================")?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
