//! Integration tests for catalog CSV loading.

use std::io::Write;

use minat_catalog::{Catalog, CatalogError, CatalogFilter};

const SAMPLE_CSV: &str = "\
Course,Program,Semester
Seni Ilustrasi Digital,Desain Komunikasi Visual,3
  Algoritma dan Pemrograman , Informatika ,1
,Informatika,2
Akuntansi Keuangan,Akuntansi,2.0
Etika Profesi,,4
";

#[test]
fn loads_rows_and_skips_blank_courses() {
    let catalog = Catalog::from_reader(SAMPLE_CSV.as_bytes()).expect("sample CSV should load");

    assert_eq!(catalog.len(), 4);
    let first = &catalog.records()[0];
    assert_eq!(
        first.combined_text(),
        "Seni Ilustrasi Digital Desain Komunikasi Visual"
    );

    // Cells are trimmed.
    let second = &catalog.records()[1];
    assert_eq!(second.course_name(), "Algoritma dan Pemrograman");
    assert_eq!(second.program_name(), "Informatika");

    assert_eq!(catalog.records()[2].semester(), 2);
    // A blank program keeps the record.
    assert_eq!(catalog.records()[3].program_name(), "");
}

#[test]
fn column_order_does_not_matter() {
    let csv = "Semester,Program,Course\n1,Akuntansi,Pengantar Akuntansi\n";
    let catalog = Catalog::from_reader(csv.as_bytes()).expect("reordered CSV should load");
    assert_eq!(catalog.records()[0].course_name(), "Pengantar Akuntansi");
    assert_eq!(catalog.records()[0].semester(), 1);
}

#[test]
fn missing_column_is_reported() {
    let csv = "Course,Semester\nPajak,1\n";
    let err = Catalog::from_reader(csv.as_bytes()).expect_err("Program column is required");
    assert!(matches!(err, CatalogError::MissingColumn("Program")));
}

#[test]
fn bad_semester_reports_line() {
    let csv = "Course,Program,Semester\nPajak,Akuntansi,1\nAudit,Akuntansi,genap\n";
    let err = Catalog::from_reader(csv.as_bytes()).expect_err("semester must be numeric");
    match err {
        CatalogError::InvalidSemester { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "genap");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_from_file_and_filters() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(SAMPLE_CSV.as_bytes())
        .expect("temp file should be writable");

    let catalog = Catalog::from_path(file.path()).expect("catalog file should load");
    assert_eq!(
        catalog.programs(),
        vec!["", "Akuntansi", "Desain Komunikasi Visual", "Informatika"]
    );
    assert_eq!(catalog.semesters(), vec![1, 2, 3, 4]);

    let semester_two = catalog.filter(&CatalogFilter::all().with_semester(2));
    assert_eq!(semester_two.len(), 1);
    assert_eq!(semester_two[0].course_name(), "Akuntansi Keuangan");
}

#[test]
fn missing_file_is_an_open_error() {
    let err = Catalog::from_path("/nonexistent/catalog.csv").expect_err("file does not exist");
    assert!(matches!(err, CatalogError::Open { .. }));
    assert!(err.to_string().contains("/nonexistent/catalog.csv"));
}
