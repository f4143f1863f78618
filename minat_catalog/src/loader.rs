use std::fs::File;
use std::io::Read;
use std::path::Path;

use minat_core::CourseRecord;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::Catalog;

pub const COURSE_COLUMN: &str = "Course";
pub const PROGRAM_COLUMN: &str = "Program";
pub const SEMESTER_COLUMN: &str = "Semester";

impl Catalog {
    /// Load the catalog from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} courses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog CSV from any reader.
    ///
    /// Rows with a blank `Course` cell are skipped. A blank `Program` cell is
    /// kept as an empty program name.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(CatalogError::MissingColumn(name))
        };
        let course_idx = column(COURSE_COLUMN)?;
        let program_idx = column(PROGRAM_COLUMN)?;
        let semester_idx = column(SEMESTER_COLUMN)?;

        let mut records = Vec::new();
        let mut skipped = 0_usize;

        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, csv::Position::line);

            let course = row.get(course_idx).unwrap_or_default();
            if course.is_empty() {
                skipped += 1;
                continue;
            }
            let program = row.get(program_idx).unwrap_or_default();
            let semester = parse_semester(row.get(semester_idx).unwrap_or_default(), line)?;

            records.push(CourseRecord::new(course, program, semester));
        }

        if skipped > 0 {
            debug!("Skipped {} rows without a course name", skipped);
        }

        Ok(Self::new(records))
    }
}

/// Accept `"3"` as well as spreadsheet exports like `"3.0"`.
fn parse_semester(value: &str, line: u64) -> Result<u32> {
    if let Ok(semester) = value.parse::<u32>() {
        return Ok(semester);
    }

    let invalid = || CatalogError::InvalidSemester {
        line,
        value: value.to_string(),
    };
    let float: f64 = value.parse().map_err(|_| invalid())?;
    if float.fract() != 0.0 || float < 0.0 || float > f64::from(u32::MAX) {
        return Err(invalid());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let semester = float as u32;
    Ok(semester)
}
