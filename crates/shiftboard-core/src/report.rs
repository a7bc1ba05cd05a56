//! Report reconciliation: date validation, sparse join, view state machine
//!
//! The join policy is deliberately sparse: a machine with no record for a
//! given shift gets blank cells, never an error. Rows keep the order the
//! source returned them in; nothing here re-sorts.

use chrono::NaiveDate;

use crate::error::{Error, ValidationError};
use crate::models::{
    MetricCell, ProductionMonitorResponse, ReportRow, ShiftWiseShift, TableReportRequest,
    TableReportResponse,
};

/// Inclusive calendar date range chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// `to >= from` or no request is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.to < self.from {
            return Err(ValidationError::DateRangeInverted);
        }
        Ok(())
    }

    /// Request body for `data/table-report/` with `YYYY-MM-DD` dates.
    pub fn to_request(&self, machine_ids: &[String]) -> TableReportRequest {
        TableReportRequest {
            machine_ids: machine_ids.to_vec(),
            from_date: self.from.format("%Y-%m-%d").to_string(),
            to_date: self.to.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Export actions require at least one machine; an empty selection is a
/// user-facing validation error, not a network call.
pub fn validate_selection(machine_ids: &[String]) -> Result<(), ValidationError> {
    if machine_ids.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    Ok(())
}

/// Reconciled, display-ready table. Read-only projection of one fetch;
/// recomputed fully on every search, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    /// Machine ids in the order the user selected them. Columns follow
    /// this order everywhere (display, CSV, PDF).
    pub machine_ids: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that carry data for the machine at column `index`.
    pub fn rows_for_machine(&self, index: usize) -> impl Iterator<Item = (&ReportRow, MetricCell)> {
        self.rows
            .iter()
            .filter_map(move |row| row.cells.get(index).copied().flatten().map(|c| (row, c)))
    }
}

/// Deterministic sparse join of a table-report response against the
/// user's machine selection.
///
/// Rows are the distinct (shift_name, date) pairs present in the response,
/// in first-appearance order across machines. Each row carries one cell per
/// selected machine id; machines without a record for that row get `None`.
pub fn build_table(response: &TableReportResponse, machine_ids: &[String]) -> ReportTable {
    let mut rows: Vec<ReportRow> = Vec::new();

    for machine in &response.machines {
        for shift in &machine.shifts {
            let seen = rows
                .iter()
                .any(|r| r.shift_name == shift.shift_name && r.date == shift.date);
            if !seen {
                rows.push(ReportRow {
                    shift_name: shift.shift_name.clone(),
                    date: shift.date.clone(),
                    start_time: shift.shift_start_time.clone(),
                    end_time: shift.shift_end_time.clone(),
                    cells: Vec::new(),
                });
            }
        }
    }

    for row in &mut rows {
        row.cells = machine_ids
            .iter()
            .map(|id| {
                let machine = response.machines.iter().find(|m| &m.machine_id == id)?;
                let slot = machine
                    .shifts
                    .iter()
                    .find(|s| s.shift_name == row.shift_name && s.date == row.date)?;
                Some(MetricCell {
                    count: slot.production_count,
                    target: slot.target_production,
                    total: slot.total,
                })
            })
            .collect();
    }

    ReportTable {
        machine_ids: machine_ids.to_vec(),
        rows,
    }
}

/// Client-side filter for the shift-report view: shifts on `date` whose
/// groups contain `machine_name`, with non-matching groups dropped. One
/// rendered row per retained (shift, group) pair.
pub fn filter_shift_wise(
    data: &ProductionMonitorResponse,
    machine_name: &str,
    date: NaiveDate,
) -> Vec<ShiftWiseShift> {
    let wanted = date.format("%Y-%m-%d").to_string();

    data.shift_wise_data
        .iter()
        .filter(|shift| shift.date() == wanted)
        .filter_map(|shift| {
            let groups: Vec<_> = shift
                .groups
                .iter()
                .filter(|group| group.machines.iter().any(|m| m.machine_name == machine_name))
                .cloned()
                .collect();
            if groups.is_empty() {
                return None;
            }
            let mut shift = shift.clone();
            shift.groups = groups;
            Some(shift)
        })
        .collect()
}

/// Lifecycle of one report view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing searched yet.
    Idle,
    /// A request is in flight.
    Fetching,
    /// The latest search resolved and its table is on screen.
    Displaying,
    /// The latest action failed; the message is surfaced to the user and
    /// any previously displayed table stays untouched.
    Failed(Error),
}

/// State machine for a report view with stale-response protection.
///
/// Searches are not cancelled when a new one is issued; instead every
/// search gets a monotonically increasing ticket and [`ReportView::resolve`]
/// discards any response whose ticket is no longer the in-flight one, so a
/// slow early response can never overwrite a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    state: ViewState,
    next_ticket: u64,
    inflight: Option<u64>,
}

impl ReportView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            next_ticket: 0,
            inflight: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Validate and enter `Fetching`, returning the ticket the caller must
    /// hand back to [`ReportView::resolve`]. On validation failure the view
    /// enters `Failed` and no ticket is issued: no fetch may happen.
    pub fn begin_search(&mut self, range: &DateRange) -> Result<u64, ValidationError> {
        if let Err(err) = range.validate() {
            self.state = ViewState::Failed(err.clone().into());
            return Err(err);
        }
        self.next_ticket += 1;
        self.inflight = Some(self.next_ticket);
        self.state = ViewState::Fetching;
        Ok(self.next_ticket)
    }

    /// Apply the outcome of a fetch. Returns false (and changes nothing)
    /// when the ticket is stale.
    pub fn resolve(&mut self, ticket: u64, result: Result<(), Error>) -> bool {
        if self.inflight != Some(ticket) {
            tracing::debug!(ticket, "discarding stale report response");
            return false;
        }
        self.inflight = None;
        self.state = match result {
            Ok(()) => ViewState::Displaying,
            Err(err) => ViewState::Failed(err),
        };
        true
    }

    /// Exports are only offered while the latest search result is shown.
    pub fn can_export(&self) -> bool {
        matches!(self.state, ViewState::Displaying)
    }
}

impl Default for ReportView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MachineReport, ShiftSlot};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn slot(name: &str, day: &str, count: i64) -> ShiftSlot {
        ShiftSlot {
            shift_name: name.to_string(),
            date: day.to_string(),
            shift_start_time: "06:00".into(),
            shift_end_time: "14:00".into(),
            production_count: count,
            target_production: count + 10,
            total: count,
        }
    }

    #[test]
    fn test_inverted_range_fails_validation() {
        let range = DateRange::new(date("2024-01-10"), date("2024-01-05"));
        assert_eq!(range.validate(), Err(ValidationError::DateRangeInverted));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(date("2024-01-05"), date("2024-01-05"));
        assert!(range.validate().is_ok());
    }

    #[test]
    fn test_request_dates_are_normalized() {
        let range = DateRange::new(date("2024-01-05"), date("2024-01-10"));
        let req = range.to_request(&["M1".into()]);
        assert_eq!(req.from_date, "2024-01-05");
        assert_eq!(req.to_date, "2024-01-10");
        assert_eq!(req.machine_ids, vec!["M1".to_string()]);
    }

    #[test]
    fn test_empty_selection_rejected_for_export() {
        assert_eq!(validate_selection(&[]), Err(ValidationError::EmptySelection));
        assert!(validate_selection(&["M1".into()]).is_ok());
    }

    #[test]
    fn test_sparse_join_blanks_missing_machine() {
        // M1 has one shift on 2024-02-01, M2 has nothing at all.
        let response = TableReportResponse {
            machines: vec![MachineReport {
                machine_id: "M1".into(),
                shifts: vec![slot("Shift 1", "2024-02-01", 410)],
            }],
        };
        let table = build_table(&response, &["M1".into(), "M2".into()]);

        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0].unwrap().count, 410);
        assert!(row.cells[1].is_none());
    }

    #[test]
    fn test_one_row_per_shift_date_pair() {
        // Shift 1 appears for both machines on the same day: one row.
        let response = TableReportResponse {
            machines: vec![
                MachineReport {
                    machine_id: "M1".into(),
                    shifts: vec![slot("Shift 1", "2024-02-01", 100), slot("Shift 2", "2024-02-01", 90)],
                },
                MachineReport {
                    machine_id: "M2".into(),
                    shifts: vec![slot("Shift 1", "2024-02-01", 120), slot("Shift 1", "2024-02-02", 80)],
                },
            ],
        };
        let table = build_table(&response, &["M1".into(), "M2".into()]);

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].shift_name, "Shift 1");
        assert_eq!(table.rows[0].date, "2024-02-01");
        assert_eq!(table.rows[1].shift_name, "Shift 2");
        // New pair from M2 appended after M1's pairs, source order kept.
        assert_eq!(table.rows[2].date, "2024-02-02");
        // Both machines populated on the shared row.
        assert_eq!(table.rows[0].cells[0].unwrap().count, 100);
        assert_eq!(table.rows[0].cells[1].unwrap().count, 120);
        // M1 absent from the 2024-02-02 row.
        assert!(table.rows[2].cells[0].is_none());
        assert_eq!(table.rows[2].cells[1].unwrap().count, 80);
    }

    #[test]
    fn test_row_count_independent_of_selection_size() {
        let response = TableReportResponse {
            machines: vec![MachineReport {
                machine_id: "M1".into(),
                shifts: vec![slot("Shift 1", "2024-02-01", 100)],
            }],
        };
        for selection in [
            vec!["M1".to_string()],
            vec!["M1".to_string(), "M2".to_string(), "M3".to_string()],
        ] {
            let table = build_table(&response, &selection);
            assert_eq!(table.rows.len(), 1);
            assert_eq!(table.rows[0].cells.len(), selection.len());
        }
    }

    #[test]
    fn test_filter_shift_wise_keeps_matching_groups_only() {
        use crate::models::{ShiftGroup, ShiftMachine};

        let monitor = ProductionMonitorResponse {
            shift_wise_data: vec![ShiftWiseShift {
                shift_id: 7,
                shift_name: Some("Day".into()),
                shift_date: "2024-02-01T00:00:00Z".into(),
                groups: vec![
                    ShiftGroup {
                        group_id: 1,
                        group_name: "Line A".into(),
                        machines: vec![ShiftMachine {
                            machine_name: "Press-1".into(),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                    ShiftGroup {
                        group_id: 2,
                        group_name: "Line B".into(),
                        machines: vec![ShiftMachine {
                            machine_name: "Press-2".into(),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
        };

        let hits = filter_shift_wise(&monitor, "Press-1", date("2024-02-01"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].groups.len(), 1);
        assert_eq!(hits[0].groups[0].group_name, "Line A");

        assert!(filter_shift_wise(&monitor, "Press-1", date("2024-02-02")).is_empty());
        assert!(filter_shift_wise(&monitor, "Press-9", date("2024-02-01")).is_empty());
    }

    #[test]
    fn test_state_machine_happy_path() {
        let mut view = ReportView::new();
        assert_eq!(*view.state(), ViewState::Idle);
        assert!(!view.can_export());

        let range = DateRange::new(date("2024-01-05"), date("2024-01-10"));
        let ticket = view.begin_search(&range).unwrap();
        assert_eq!(*view.state(), ViewState::Fetching);

        assert!(view.resolve(ticket, Ok(())));
        assert_eq!(*view.state(), ViewState::Displaying);
        assert!(view.can_export());
    }

    #[test]
    fn test_validation_failure_issues_no_ticket() {
        let mut view = ReportView::new();
        let range = DateRange::new(date("2024-01-10"), date("2024-01-05"));
        assert!(view.begin_search(&range).is_err());
        assert!(matches!(view.state(), ViewState::Failed(Error::Validation(_))));
        assert!(!view.can_export());
    }

    #[test]
    fn test_fetch_failure_surfaces() {
        let mut view = ReportView::new();
        let range = DateRange::new(date("2024-01-05"), date("2024-01-10"));
        let ticket = view.begin_search(&range).unwrap();
        view.resolve(ticket, Err(Error::Network("offline".into())));
        assert!(matches!(view.state(), ViewState::Failed(Error::Network(_))));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut view = ReportView::new();
        let range = DateRange::new(date("2024-01-05"), date("2024-01-10"));

        let first = view.begin_search(&range).unwrap();
        let second = view.begin_search(&range).unwrap();
        assert_ne!(first, second);

        // Later response lands first and wins.
        assert!(view.resolve(second, Ok(())));
        assert_eq!(*view.state(), ViewState::Displaying);

        // The earlier, slower response must not overwrite it.
        assert!(!view.resolve(first, Err(Error::Network("slow".into()))));
        assert_eq!(*view.state(), ViewState::Displaying);
    }

    #[test]
    fn test_new_search_leaves_displaying() {
        let mut view = ReportView::new();
        let range = DateRange::new(date("2024-01-05"), date("2024-01-10"));
        let ticket = view.begin_search(&range).unwrap();
        view.resolve(ticket, Ok(()));

        view.begin_search(&range).unwrap();
        assert_eq!(*view.state(), ViewState::Fetching);
        assert!(!view.can_export());
    }
}
