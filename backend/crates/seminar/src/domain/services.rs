//! Domain Services
//!
//! Pure ordering logic for seminar tables.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::domain::entity::seminar::Seminar;

/// Column a seminar table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    ScheduledAt,
    Title,
    Student,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort seminars in place
///
/// The sort is stable. Text columns compare case-insensitively. `Type`
/// follows the declaration order of
/// [`SeminarType`](crate::domain::entity::seminar::SeminarType) (proposal, result,
/// final, other), not the tag text. Seminars without a schedule always come
/// last when sorting by `ScheduledAt`, whatever the order.
pub fn sort_seminars(seminars: &mut [Seminar], key: SortKey, order: SortOrder) {
    seminars.sort_by(|a, b| compare(a, b, key, order));
}

fn compare(a: &Seminar, b: &Seminar, key: SortKey, order: SortOrder) -> Ordering {
    let directed = |ordering: Ordering| match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match key {
        SortKey::ScheduledAt => match (&a.scheduled_at, &b.scheduled_at) {
            (Some(x), Some(y)) => directed(x.cmp(y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Title => directed(cmp_text(&a.title, &b.title)),
        SortKey::Student => directed(cmp_text(&a.student.name, &b.student.name)),
        SortKey::Type => directed(a.seminar_type.cmp(&b.seminar_type)),
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
