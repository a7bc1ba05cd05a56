//! End-to-end exercise of the report reconciler: validation gates the
//! fetch, the sparse join shapes the table, and exports round-trip.

use chrono::NaiveDate;
use shiftboard_core::models::{MachineReport, ShiftSlot, TableReportResponse};
use shiftboard_core::{
    build_table, report_to_csv, report_to_pdf, validate_selection, DateRange, Error, ReportView,
    ValidationError, ViewState,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn slot(name: &str, day: &str, count: i64, target: i64) -> ShiftSlot {
    ShiftSlot {
        shift_name: name.to_string(),
        date: day.to_string(),
        shift_start_time: "06:00".into(),
        shift_end_time: "14:00".into(),
        production_count: count,
        target_production: target,
        total: count,
    }
}

fn two_machine_response() -> TableReportResponse {
    TableReportResponse {
        machines: vec![
            MachineReport {
                machine_id: "M1".into(),
                shifts: vec![
                    slot("Shift 1", "2024-02-01", 410, 500),
                    slot("Shift 2", "2024-02-01", 380, 500),
                    slot("Shift 1", "2024-02-02", 395, 500),
                ],
            },
            MachineReport {
                machine_id: "M2".into(),
                shifts: vec![slot("Shift 1", "2024-02-01", 512, 520)],
            },
        ],
    }
}

#[test]
fn inverted_range_never_reaches_the_network() {
    let mut view = ReportView::new();
    let range = DateRange::new(date("2024-01-10"), date("2024-01-05"));

    let err = view.begin_search(&range).unwrap_err();
    assert_eq!(err.to_string(), "pls select the date correctly");

    // No ticket was issued, so there is nothing a fetch could resolve:
    // the view sits in Failed until the user corrects the range.
    assert!(matches!(
        view.state(),
        ViewState::Failed(Error::Validation(ValidationError::DateRangeInverted))
    ));

    let corrected = DateRange::new(date("2024-01-05"), date("2024-01-10"));
    let ticket = view.begin_search(&corrected).unwrap();
    view.resolve(ticket, Ok(()));
    assert!(view.can_export());
}

#[test]
fn sparse_join_then_csv_preserves_rows_and_column_order() {
    let selection = vec!["M2".to_string(), "M1".to_string()];
    let table = build_table(&two_machine_response(), &selection);

    // Three distinct (shift, date) pairs regardless of selection size.
    assert_eq!(table.rows.len(), 3);

    let csv = report_to_csv(&table);
    let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();

    // Header + sub-header + one line per table row.
    assert_eq!(lines.len(), 2 + table.rows.len());

    // Machine blocks appear in the order the user picked them: M2 first.
    let header: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(header[4], "M2");
    assert_eq!(header[7], "M1");

    // M2 only worked Shift 1 on 2024-02-01; every other row blanks it.
    for line in &lines[3..] {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(&cells[4..7], &["", "", ""]);
        assert!(!cells[7].is_empty());
    }
}

#[test]
fn empty_selection_blocks_export_actions() {
    assert_eq!(validate_selection(&[]), Err(ValidationError::EmptySelection));

    let err: Error = ValidationError::EmptySelection.into();
    assert!(err.is_validation());
}

#[test]
fn pdf_contains_a_section_per_selected_machine() {
    let selection = vec!["M1".to_string(), "M2".to_string(), "M3".to_string()];
    let table = build_table(&two_machine_response(), &selection);

    // M3 has no data; its section renders a placeholder instead of failing.
    let bytes = report_to_pdf(&table).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!bytes.is_empty());
}

#[test]
fn pdf_paginates_long_reports_without_failing() {
    // Enough rows to spill over several A4 pages. Every slot gets its own
    // date so no (shift, date) pair collapses in the join.
    let shifts: Vec<ShiftSlot> = (0..200)
        .map(|i| {
            let day = format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1);
            slot(&format!("Shift {}", i % 3 + 1), &day, i, i + 10)
        })
        .collect();
    let response = TableReportResponse {
        machines: vec![MachineReport {
            machine_id: "M1".into(),
            shifts,
        }],
    };
    let table = build_table(&response, &["M1".into()]);
    assert_eq!(table.rows.len(), 200);

    let bytes = report_to_pdf(&table).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn out_of_order_responses_keep_the_latest_search() {
    let mut view = ReportView::new();
    let range = DateRange::new(date("2024-02-01"), date("2024-02-02"));

    let stale = view.begin_search(&range).unwrap();
    let fresh = view.begin_search(&range).unwrap();

    assert!(view.resolve(fresh, Ok(())));
    assert!(!view.resolve(stale, Err(Error::Fetch { status: 500, message: "late".into() })));
    assert_eq!(*view.state(), ViewState::Displaying);
}
