//! Integration tests for roster import, export and reports

use hlaqh_progress::core::progress::Position;
use hlaqh_progress::core::progress_export::{
    compute_rows, export_progress_csv, ClassSummary, ProgressStatus,
};
use hlaqh_progress::core::report::{reporter_for, ReportContext, ReportFormat};
use hlaqh_progress::core::roster::{parse_roster_csv, parse_roster_str};
use std::fs;
use tempfile::TempDir;

const SAMPLE_ROSTER: &str = "samples/rosters/al_noor.csv";

#[test]
fn parses_sample_roster() {
    let roster = parse_roster_csv(SAMPLE_ROSTER).expect("parse roster");

    assert_eq!(roster.class_name, "Halaqa Al-Noor");
    assert_eq!(roster.teacher.as_deref(), Some("Ahmad Hassan"));
    assert_eq!(roster.students.len(), 7);

    let maryam = roster.get_student("maryam, b.").expect("quoted name");
    assert_eq!(maryam.memorized, Some(Position::new(67, 30)));
    assert_eq!(maryam.target, Some(Position::new(68, 20)));

    let ibrahim = roster.get_student("Ibrahim").expect("arabic surah name");
    assert_eq!(ibrahim.memorized, Some(Position::new(112, 4)));
    assert!(ibrahim.target.is_none());
}

#[test]
fn missing_file_is_an_error() {
    assert!(parse_roster_csv("samples/rosters/does_not_exist.csv").is_err());
}

#[test]
fn computes_statuses_and_summary() {
    let roster = parse_roster_csv(SAMPLE_ROSTER).expect("parse roster");
    let rows = compute_rows(&roster);
    let summary = ClassSummary::from_rows(&rows);

    let status_of = |name: &str| {
        rows.iter()
            .find(|r| r.name == name)
            .map(|r| r.status)
            .expect("student row")
    };
    assert_eq!(status_of("Hamza"), ProgressStatus::NotStarted);
    assert_eq!(status_of("Omar"), ProgressStatus::UnknownSurah);
    assert_eq!(status_of("Zainab"), ProgressStatus::Recorded);

    assert_eq!(summary.student_count, 7);
    assert_eq!(summary.started_count, 5);
    assert_eq!(summary.invalid_count, 1);
    assert_eq!(summary.top_student.as_deref(), Some("Zainab"));
    assert!((summary.top_percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn exports_sample_roster_csv() {
    let dir = TempDir::new().expect("temp dir");
    let output_path = dir.path().join("al_noor_progress.csv");

    let roster = parse_roster_csv(SAMPLE_ROSTER).expect("parse roster");
    export_progress_csv(&roster, &output_path).expect("export");

    let contents = fs::read_to_string(&output_path).expect("read export");
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "Class,Halaqa Al-Noor");
    assert!(contents.contains("\"Maryam, B.\",recorded,67,30,Al-Mulk"));
    assert!(contents.contains("Hamza,not started,,,"));
    // Header plus one row per student after the Students marker
    let students_at = lines
        .iter()
        .rposition(|l| *l == "Students")
        .expect("students section");
    assert_eq!(lines.len() - students_at - 2, 7);
}

#[test]
fn renders_every_report_format() {
    let dir = TempDir::new().expect("temp dir");
    let roster = parse_roster_csv(SAMPLE_ROSTER).expect("parse roster");
    let rows = compute_rows(&roster);
    let summary = ClassSummary::from_rows(&rows);
    let ctx = ReportContext::new(&roster, &rows, &summary, "Halaqa Weekly");

    for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Json] {
        let path = dir.path().join(format!("report.{}", format.extension()));
        reporter_for(format)
            .generate(&ctx, &path)
            .expect("generate report");

        let contents = fs::read_to_string(&path).expect("read report");
        assert!(contents.contains("Halaqa Weekly"), "{format} has the title");
        assert!(contents.contains("Zainab"), "{format} lists students");
    }
}

#[test]
fn oversized_ayah_in_roster_is_reported_unclamped() {
    let roster = parse_roster_str(
        "Class,Overflow\nStudents\nName,Memorized Surah,Memorized Ayah\nZaid,2,4294967295\n",
    )
    .expect("parse roster");
    let rows = compute_rows(&roster);

    assert_eq!(rows[0].status, ProgressStatus::Recorded);
    assert_eq!(rows[0].report.memorized_ayahs, 5950 + u64::from(u32::MAX));
    assert!(rows[0].report.percentage > 100.0);
    assert!(rows[0].report.remaining_ayahs < 0);
}

#[test]
fn exported_csv_reimports_as_a_roster() {
    let dir = TempDir::new().expect("temp dir");
    let output_path = dir.path().join("al_noor_progress.csv");

    let roster = parse_roster_csv(SAMPLE_ROSTER).expect("parse roster");
    export_progress_csv(&roster, &output_path).expect("export");

    let reimported = parse_roster_csv(&output_path).expect("reimport export");
    assert_eq!(reimported.class_name, "Halaqa Al-Noor");
    assert_eq!(reimported.students.len(), 7);
    let maryam = reimported.get_student("Maryam, B.").expect("quoted name");
    assert_eq!(maryam.memorized, Some(Position::new(67, 30)));
    assert_eq!(maryam.target, Some(Position::new(68, 20)));
}
