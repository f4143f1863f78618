//! Course catalog loading and filtering.
//!
//! The catalog is a CSV file with `Course`, `Program` and `Semester`
//! columns. It is loaded once and shared read-only; each request narrows it
//! with a [`CatalogFilter`] before ranking.

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod error;
mod filter;
mod loader;

pub use error::{CatalogError, Result};
pub use filter::CatalogFilter;
pub use loader::{COURSE_COLUMN, PROGRAM_COLUMN, SEMESTER_COLUMN};

use minat_core::CourseRecord;

/// An immutable snapshot of the course catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CourseRecord>,
}

impl Catalog {
    #[must_use]
    pub const fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct program names, sorted.
    #[must_use]
    pub fn programs(&self) -> Vec<&str> {
        let mut programs: Vec<&str> = self.records.iter().map(CourseRecord::program_name).collect();
        programs.sort_unstable();
        programs.dedup();
        programs
    }

    /// Distinct semesters, ascending.
    #[must_use]
    pub fn semesters(&self) -> Vec<u32> {
        let mut semesters: Vec<u32> = self.records.iter().map(CourseRecord::semester).collect();
        semesters.sort_unstable();
        semesters.dedup();
        semesters
    }

    /// Records passing `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&CourseRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}
