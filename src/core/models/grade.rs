//! Letter-grade scale and marks-to-grade mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed ordered grade scale: S(10.0) > A(9.0) > B(8.0) > C(7.0) > D(6.0) >
/// E(5.0) > F(0.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10.0 grade points).
    S,
    /// Excellent (9.0).
    A,
    /// Very Good (8.0).
    B,
    /// Good (7.0).
    C,
    /// Average (6.0).
    D,
    /// Pass (5.0).
    E,
    /// Fail (0.0).
    F,
}

impl Grade {
    /// Grade points carried by this letter.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
        }
    }

    /// Human-readable description of this letter.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::S => "Outstanding",
            Self::A => "Excellent",
            Self::B => "Very Good",
            Self::C => "Good",
            Self::D => "Average",
            Self::E => "Pass",
            Self::F => "Fail",
        }
    }

    /// Map a numeric score to a letter with fixed thresholds. Boundary
    /// values belong to the higher grade (90.0 is an S, not an A).
    #[must_use]
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Self::S
        } else if marks >= 80.0 {
            Self::A
        } else if marks >= 70.0 {
            Self::B
        } else if marks >= 60.0 {
            Self::C
        } else if marks >= 50.0 {
            Self::D
        } else if marks >= 40.0 {
            Self::E
        } else {
            Self::F
        }
    }

    /// The grade letter as a string.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown grade letter: '{other}'")),
        }
    }
}
