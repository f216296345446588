//! API DTOs (Data Transfer Objects)

use kernel::pagination::Page;
use serde::{Deserialize, Serialize};

use crate::domain::entity::seminar::Seminar;
use crate::domain::services::{SortKey, SortOrder};

// ============================================================================
// Seminar Detail
// ============================================================================

/// Query of the public detail page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeminarDetailQuery {
    /// Raw access token, `<verification code>:su<seminar id>`
    pub id: Option<String>,
}

/// Seminar detail response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeminarDetailResponse {
    pub seminar: Seminar,
}

// ============================================================================
// Seminar List
// ============================================================================

/// Seminar list query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSeminarsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort_by: Option<SortKey>,
    pub order: Option<SortOrder>,
}

/// Seminar list response
pub type ListSeminarsResponse = Page<Seminar>;
