//! Seminar Entity
//!
//! Read-only view of a seminar record as served by the remote seminar API.

use chrono::{DateTime, Utc};
use derive_more::Display;
use kernel::id::{LecturerId, SeminarId, StudentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seminar {
    pub id: SeminarId,
    pub title: String,
    pub student: Student,
    /// `None` until a coordinator schedules the seminar
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub advisors: Vec<Lecturer>,
    #[serde(default)]
    pub assessors: Vec<Lecturer>,
    #[serde(rename = "type")]
    pub seminar_type: SeminarType,
}

impl Seminar {
    pub fn is_scheduled(&self) -> bool {
        self.scheduled_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: Option<StudentId>,
    pub name: String,
    #[serde(default)]
    pub student_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    #[serde(default)]
    pub id: Option<LecturerId>,
    pub name: String,
    #[serde(default)]
    pub employee_number: Option<String>,
}

/// Seminar type tag
///
/// Tags this service does not know are kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SeminarType {
    #[display("proposal")]
    Proposal,
    #[serde(rename = "result")]
    #[display("result")]
    Results,
    #[display("final")]
    Final,
    #[serde(other)]
    #[display("other")]
    Other,
}
