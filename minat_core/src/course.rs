use serde::Serialize;

/// An immutable catalog entry.
///
/// `combined_text` is derived once from the course and program names when the
/// record is created and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    course_name: String,
    program_name: String,
    semester: u32,
    combined_text: String,
}

impl CourseRecord {
    #[must_use]
    pub fn new(course_name: impl Into<String>, program_name: impl Into<String>, semester: u32) -> Self {
        let course_name = course_name.into();
        let program_name = program_name.into();
        let combined_text = format!("{course_name} {program_name}");
        Self {
            course_name,
            program_name,
            semester,
            combined_text,
        }
    }

    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    #[must_use]
    pub const fn semester(&self) -> u32 {
        self.semester
    }

    /// Text indexed for relevance ranking: `"<course> <program>"`.
    #[must_use]
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }
}

/// A user query as it moves through the pipeline.
///
/// Each stage yields a new value; nothing mutates a shared query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub raw_text: String,
    pub normalized_text: String,
    pub expanded_text: String,
}

/// A catalog entry paired with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    pub course: &'a CourseRecord,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

impl ScoredMatch<'_> {
    /// Score as a whole percentage, truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_joins_course_and_program() {
        let record = CourseRecord::new("Seni Ilustrasi Digital", "Desain Komunikasi Visual", 3);
        assert_eq!(
            record.combined_text(),
            "Seni Ilustrasi Digital Desain Komunikasi Visual"
        );
        assert_eq!(record.semester(), 3);
    }

    #[test]
    fn percent_truncates() {
        let record = CourseRecord::new("Akuntansi Dasar", "Akuntansi", 1);
        let scored = ScoredMatch {
            course: &record,
            score: 0.819,
        };
        assert_eq!(scored.percent(), 81);
    }
}
