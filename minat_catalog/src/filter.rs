use minat_core::CourseRecord;
use serde::{Deserialize, Serialize};

/// Program and semester selection. `None` selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub program: Option<String>,
    pub semester: Option<u32>,
}

impl CatalogFilter {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            program: None,
            semester: None,
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    #[must_use]
    pub const fn with_semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Program names compare exactly.
    #[must_use]
    pub fn matches(&self, record: &CourseRecord) -> bool {
        self.program
            .as_deref()
            .is_none_or(|p| record.program_name() == p)
            && self.semester.is_none_or(|s| record.semester() == s)
    }

    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.program.is_none() && self.semester.is_none()
    }
}
