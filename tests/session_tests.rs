mod common;
use common::{SAMPLE, SAMPLE_CSV, files_in, workspace};

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use telopcsv::core::session::{Session, SessionOptions};
use telopcsv::errors::AppError;
use telopcsv::export::ExportFormat;
use telopcsv::models::raw_row::WhitespaceMode;

const FIVE_ROWS: &str = "\
00:00-00:01,r0
00:00-00:02,r1
00:00-00:03,r2
00:00-00:04,r3
00:00-00:05,r4";

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap()
}

fn processed(text: &str) -> Session {
    let mut s = Session::default();
    s.set_raw_text(text);
    s.process_at(at()).expect("process");
    s
}

fn captions(s: &Session) -> Vec<String> {
    s.rows()
        .iter()
        .map(|r| r.caption.clone().unwrap_or_default())
        .collect()
}

#[test]
fn test_delete_selected_rows() {
    let mut s = processed(FIVE_ROWS);
    assert!(s.toggle_row(1).unwrap());
    assert!(s.toggle_row(3).unwrap());

    assert_eq!(s.delete_selected(), 2);
    assert_eq!(s.rows().len(), 3);
    assert!(s.selected().is_empty());
    assert_eq!(captions(&s), vec!["r0", "r2", "r4"]);
}

#[test]
fn test_toggle_flips_membership() {
    let mut s = processed(FIVE_ROWS);
    assert!(s.toggle_row(2).unwrap());
    assert!(s.is_selected(2));
    assert!(!s.toggle_row(2).unwrap());
    assert!(!s.is_selected(2));
}

#[test]
fn test_toggle_out_of_range_is_rejected() {
    let mut s = processed(FIVE_ROWS);
    s.toggle_row(0).unwrap();

    let err = s.toggle_row(5).unwrap_err();
    assert!(matches!(err, AppError::InvalidRow(6)));
    assert_eq!(s.selected().len(), 1);
    assert!(s.error_message().is_some());
}

#[test]
fn test_successful_action_clears_message() {
    let mut s = processed(FIVE_ROWS);

    assert!(s.toggle_row(99).is_err());
    assert_eq!(s.error_message(), Some("Invalid row number: 100"));
    s.toggle_row(0).unwrap();
    assert!(s.error_message().is_none());

    assert!(s.toggle_row(99).is_err());
    s.select_all(false);
    assert!(s.error_message().is_none());

    s.set_file_name("report.txt");
    assert!(s.render(ExportFormat::Csv).is_err());
    assert!(s.error_message().unwrap().contains("report.txt"));
    s.set_file_name("report.csv");
    assert!(s.error_message().is_none());

    assert!(s.toggle_row(99).is_err());
    s.toggle_row(1).unwrap();
    assert!(s.toggle_row(99).is_err());
    assert_eq!(s.delete_selected(), 1);
    assert!(s.error_message().is_none());

    s.set_file_name("report.txt");
    assert!(s.render(ExportFormat::Csv).is_err());
    s.set_file_name("report.csv");
    assert!(s.toggle_row(99).is_err());
    assert!(s.render(ExportFormat::Csv).is_ok());
    assert!(s.error_message().is_none());
}

#[test]
fn test_select_all_and_clear() {
    let mut s = processed(FIVE_ROWS);
    s.select_all(true);
    assert!(s.all_selected());
    assert_eq!(s.selected().len(), 5);

    s.select_all(false);
    assert!(s.selected().is_empty());
    assert!(!s.all_selected());

    // empty table is never "all selected"
    let mut empty = Session::default();
    empty.select_all(true);
    assert!(!empty.all_selected());
}

#[test]
fn test_delete_everything_then_export_fails() {
    let mut s = processed(FIVE_ROWS);
    s.select_all(true);
    assert_eq!(s.delete_selected(), 5);
    assert!(s.rows().is_empty());

    let err = s.render(ExportFormat::Csv).unwrap_err();
    assert!(matches!(err, AppError::EmptyData));

    let tmp = workspace();
    let err = s.download(tmp.path(), ExportFormat::Csv, false).unwrap_err();
    assert!(matches!(err, AppError::EmptyData));
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn test_process_resets_selection_and_is_repeatable() {
    let mut s = processed(SAMPLE);
    let first = s.rows().to_vec();
    s.toggle_row(0).unwrap();

    s.process_at(at()).unwrap();
    assert!(s.selected().is_empty());
    assert_eq!(s.rows(), first.as_slice());
}

#[test]
fn test_default_file_name() {
    let s = processed(SAMPLE);
    assert_eq!(
        s.output_file_name(),
        "output_with_header_20250102_030405.csv"
    );
    assert_eq!(s.file_name_input(), "output_with_header_20250102_030405.csv");
    assert_eq!(
        s.resolved_file_name(ExportFormat::Json),
        "output_with_header_20250102_030405.json"
    );
}

#[test]
fn test_custom_prefix() {
    let mut s = Session::new(SessionOptions {
        whitespace: WhitespaceMode::Remove,
        file_prefix: "captions".into(),
    });
    s.set_raw_text(SAMPLE);
    s.process_at(at()).unwrap();
    assert_eq!(s.output_file_name(), "captions_20250102_030405.csv");
}

#[test]
fn test_file_name_validation() {
    let mut s = processed(SAMPLE);

    s.set_file_name("report.txt");
    let err = s.render(ExportFormat::Csv).unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert!(s.error_message().unwrap().contains("report.txt"));

    s.set_file_name("  report.CSV  ");
    assert_eq!(s.resolved_file_name(ExportFormat::Csv), "report.CSV");
    assert_eq!(s.render(ExportFormat::Csv).unwrap(), SAMPLE_CSV);

    s.set_file_name("   ");
    assert_eq!(
        s.resolved_file_name(ExportFormat::Csv),
        "output_with_header_20250102_030405.csv"
    );
}

#[test]
fn test_empty_input_is_blocking() {
    let mut s = processed(SAMPLE);
    s.set_raw_text(" \n ");

    let err = s.process_at(at()).unwrap_err();
    assert!(matches!(err, AppError::EmptyInput));
    assert!(s.rows().is_empty());
    assert!(s.error_message().is_some());
}

#[test]
fn test_warning_message_and_clearing() {
    let mut s = processed("09:xx-10:00,abc\n10:00-10:03,abcdefghij");
    assert_eq!(s.rows().len(), 2);
    assert_eq!(s.rows()[0].duration, None);
    assert_eq!(s.rows()[1].rate, Some(3.333333));
    assert_eq!(s.warnings().len(), 1);
    assert!(s.error_message().unwrap().contains("09:xx"));

    s.set_raw_text(SAMPLE);
    s.process_at(at()).unwrap();
    assert!(s.error_message().is_none());
    assert!(s.warnings().is_empty());
}

#[test]
fn test_download_writes_rendered_csv() {
    let tmp = workspace();
    let mut s = processed(SAMPLE);

    let path = s.download(tmp.path(), ExportFormat::Csv, false).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "output_with_header_20250102_030405.csv"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_download_json_keeps_passthrough() {
    let tmp = workspace();
    let mut s = processed(SAMPLE);

    let path = s.download(tmp.path(), ExportFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value[0]["duration"], 90);
    assert_eq!(value[0]["passthrough"][0], "extra");
    assert!(value[2]["rate"].is_null());
}

#[test]
fn test_load_file_failure_keeps_text() {
    let tmp = workspace();
    let mut s = Session::default();
    s.set_raw_text("previous");

    let err = s.load_file(&tmp.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(s.raw_text(), "previous");
}

#[test]
fn test_load_file_replaces_text() {
    let tmp = workspace();
    let path = tmp.path().join("in.csv");
    fs::write(&path, SAMPLE).unwrap();

    let mut s = Session::default();
    s.set_raw_text("old");
    s.load_file(&path).unwrap();
    assert_eq!(s.raw_text(), SAMPLE);
}
