use std::io::Cursor;
use track::core::codec::Malformed;
use track::core::validate::{Filter, read_entries};
use track::errors::FormatError;
use track::utils::spoken_list;

const A: &str = "2026-10-19 09:00:00 +0200";
const B: &str = "2026-10-19 12:00:00 +0200";
const C: &str = "2026-10-19 13:00:00 +0200";
const D: &str = "2026-10-19 17:30:00 +0200";

fn scan(content: &str, filter: Filter) -> track::core::validate::Scan {
    read_entries(Cursor::new(content.as_bytes()), filter).expect("scan")
}

#[test]
fn test_well_formed_log_has_no_report() {
    let content = format!("{A},{B}\n{C},{D}\n");
    let s = scan(&content, Filter::All);

    assert!(s.report.is_none());
    assert_eq!(s.entries.len(), 2);
    assert!(s.entries.iter().all(|e| e.is_complete()));
    assert_eq!(s.entries[0].offset, 0);
    assert_eq!(s.entries[1].offset, (A.len() + 1 + B.len() + 1) as u64);
}

#[test]
fn test_empty_log_has_no_report() {
    let s = scan("", Filter::All);
    assert!(s.report.is_none());
    assert!(s.entries.is_empty());
}

#[test]
fn test_open_tail_is_just_incomplete() {
    let content = format!("{A},{B}\n{C}\n");
    let s = scan(&content, Filter::All);

    let report = s.report.expect("report");
    assert_eq!(report.bad_lines, vec![2]);
    assert!(report.last_is_bad);
    assert!(report.just_incomplete());

    let tail = s.entries.last().unwrap();
    assert!(tail.open_record().is_some());
    assert_eq!(tail.offset, (A.len() + 1 + B.len() + 1) as u64);
}

#[test]
fn test_interior_open_row_is_bad() {
    let content = format!("{A}\n{C},{D}\n");
    let report = scan(&content, Filter::All).report.expect("report");

    assert_eq!(report.bad_lines, vec![1]);
    assert!(!report.last_is_bad);
    assert!(!report.just_incomplete());
}

#[test]
fn test_every_bad_row_is_reported() {
    let content = format!("{A},{B},{C}\n{A},{B}\nnot a time\n{C}\n");
    let s = scan(&content, Filter::All);
    let report = s.report.expect("report");

    assert_eq!(report.bad_lines, vec![1, 3, 4]);
    assert!(report.last_is_bad);
    assert!(!report.just_incomplete());

    assert_eq!(s.entries[0].record, Err(Malformed::FieldCount(3)));
    assert_eq!(
        s.entries[2].record,
        Err(Malformed::Timestamp("not a time".to_string()))
    );
}

#[test]
fn test_malformed_tail_is_not_an_open_entry() {
    let content = format!("{A},{B}\n{C},{D},{D}\n");
    let report = scan(&content, Filter::All).report.expect("report");

    assert_eq!(report.bad_lines, vec![2]);
    assert!(!report.last_is_bad);
    assert!(!report.just_incomplete());
}

#[test]
fn test_complete_filter_keeps_closed_records_only() {
    let content = format!("{A},{B},{C}\n{A},{B}\n{C},{D}\n{A}\n");

    let all = scan(&content, Filter::All);
    assert_eq!(all.entries.len(), 4);

    let complete = scan(&content, Filter::Complete);
    assert_eq!(complete.entries.len(), 2);
    assert!(complete.entries.iter().all(|e| e.is_complete()));
    assert_eq!(complete.entries[0].line, 2);
    assert_eq!(complete.entries[1].line, 3);
    // filtering never hides the report
    assert_eq!(complete.report.map(|r| r.bad_lines), Some(vec![1, 4]));
}

#[test]
fn test_blank_lines_are_skipped() {
    let content = format!("{A},{B}\n\n{C},{D}\n\n");
    let s = scan(&content, Filter::All);

    assert!(s.report.is_none());
    assert_eq!(s.entries.len(), 2);
}

#[test]
fn test_format_error_messages() {
    let incomplete = FormatError {
        bad_lines: vec![4],
        last_is_bad: true,
    };
    assert_eq!(incomplete.to_string(), "last entry is incomplete");

    let single = FormatError {
        bad_lines: vec![2],
        last_is_bad: false,
    };
    assert_eq!(single.to_string(), "incomplete or invalid entry on line 2");

    let two = FormatError {
        bad_lines: vec![2, 7],
        last_is_bad: true,
    };
    assert_eq!(
        two.to_string(),
        "incomplete or invalid entries on lines 2 and 7"
    );

    let three = FormatError {
        bad_lines: vec![1, 2, 3],
        last_is_bad: false,
    };
    assert_eq!(
        three.to_string(),
        "incomplete or invalid entries on lines 1, 2, and 3"
    );
}

#[test]
fn test_spoken_list() {
    assert_eq!(spoken_list(&[5]), "5");
    assert_eq!(spoken_list(&[5, 6]), "5 and 6");
    assert_eq!(spoken_list(&[5, 6, 7]), "5, 6, and 7");
    assert_eq!(spoken_list(&[1, 2, 3, 4]), "1, 2, 3, and 4");
    assert_eq!(spoken_list(&[]), "");
}
