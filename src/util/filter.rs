//! Client-side listing filters.
//!
//! Listings are fetched whole and narrowed in memory as the user types.
//! Matching is case-insensitive substring search; an empty search term
//! matches every row. Select filters use the sentinel value `all` to mean
//! "no filter".

use crate::net::types::{Event, Job, Professional};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Sentinel select-option meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search across an event's title, location and category.
pub fn event_matches(event: &Event, search: &str) -> bool {
    let term = search.to_lowercase();
    contains_ci(&event.title, &term)
        || contains_ci(&event.location, &term)
        || event
            .category
            .as_deref()
            .is_some_and(|category| contains_ci(category, &term))
}

/// Search across a job's title, description and location, then narrow by
/// the category and employment-type selects.
pub fn job_matches(job: &Job, search: &str, category: &str, employment_type: &str) -> bool {
    let term = search.to_lowercase();
    let matches_search = contains_ci(&job.title, &term)
        || job
            .description
            .as_deref()
            .is_some_and(|description| contains_ci(description, &term))
        || contains_ci(&job.location, &term);
    let matches_category = category == FILTER_ALL || job.category == category;
    let matches_type = employment_type == FILTER_ALL || job.employment_type == employment_type;
    matches_search && matches_category && matches_type
}

/// Search across a professional's name, location, category and specialties,
/// then narrow by the category select and by weekday availability.
///
/// A professional with no `availability_days` is excluded once a weekday is
/// chosen: unknown availability is treated as unavailable.
pub fn professional_matches(
    professional: &Professional,
    search: &str,
    category: &str,
    weekday: &str,
) -> bool {
    let term = search.to_lowercase();
    let matches_search = contains_ci(&professional.name, &term)
        || contains_ci(&professional.location, &term)
        || contains_ci(&professional.category, &term)
        || professional
            .specialties
            .as_deref()
            .is_some_and(|specialties| {
                specialties
                    .iter()
                    .any(|specialty| contains_ci(specialty, &term))
            });
    let matches_category = category == FILTER_ALL || professional.category == category;
    let matches_weekday = weekday == FILTER_ALL
        || professional
            .availability_days
            .as_deref()
            .is_some_and(|days| days.iter().any(|day| day == weekday));
    matches_search && matches_category && matches_weekday
}
