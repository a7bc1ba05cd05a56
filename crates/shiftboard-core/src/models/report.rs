//! Wire types for the auth and reporting APIs plus the derived report table
//!
//! Everything fetched is immutable once decoded and superseded wholesale by
//! the next fetch; there is no incremental merge.

use serde::{Deserialize, Serialize};

/// `POST login/` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST login/` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST data/table-report/` request body. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct TableReportRequest {
    pub machine_ids: Vec<String>,
    pub from_date: String,
    pub to_date: String,
}

/// `POST data/table-report/` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableReportResponse {
    #[serde(default)]
    pub machines: Vec<MachineReport>,
}

/// Per-machine block of the table report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MachineReport {
    #[serde(default)]
    pub machine_id: String,
    #[serde(default)]
    pub shifts: Vec<ShiftSlot>,
}

/// One shift occurrence for one machine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftSlot {
    #[serde(default)]
    pub shift_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub shift_start_time: String,
    #[serde(default)]
    pub shift_end_time: String,
    #[serde(default)]
    pub production_count: i64,
    #[serde(default)]
    pub target_production: i64,
    #[serde(default)]
    pub total: i64,
}

/// `GET data/production-monitor/` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductionMonitorResponse {
    #[serde(default)]
    pub shift_wise_data: Vec<ShiftWiseShift>,
}

/// One shift in the production-monitor feed, grouped by machine group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftWiseShift {
    #[serde(default)]
    pub shift_id: u64,
    #[serde(default)]
    pub shift_number: Option<u32>,
    #[serde(default)]
    pub shift_name: Option<String>,
    /// May carry a trailing `T..` time portion; date comparisons use the
    /// calendar-date prefix only.
    #[serde(default)]
    pub shift_date: String,
    #[serde(default)]
    pub shift_start_time: String,
    #[serde(default)]
    pub shift_end_time: String,
    #[serde(default)]
    pub groups: Vec<ShiftGroup>,
}

impl ShiftWiseShift {
    /// Display label: the shift name when present, otherwise the number.
    pub fn label(&self) -> String {
        if let Some(name) = self.shift_name.as_ref().filter(|n| !n.is_empty()) {
            return name.clone();
        }
        match self.shift_number {
            Some(n) => format!("Shift {}", n),
            None => "Shift N/A".to_string(),
        }
    }

    /// Calendar-date prefix of `shift_date`.
    pub fn date(&self) -> &str {
        self.shift_date.split('T').next().unwrap_or("")
    }
}

/// Machine group inside one shift of the production-monitor feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftGroup {
    #[serde(default)]
    pub group_id: u64,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub total_production_count_by_group: i64,
    #[serde(default)]
    pub machines: Vec<ShiftMachine>,
}

/// Per-machine counters inside a group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftMachine {
    #[serde(default)]
    pub machine_id: String,
    #[serde(default)]
    pub machine_name: String,
    #[serde(default)]
    pub production_count: i64,
    #[serde(default)]
    pub target_production: i64,
}

/// Count/target/total metrics for one machine in one shift row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricCell {
    pub count: i64,
    pub target: i64,
    pub total: i64,
}

/// One row of the reconciled report: a (shift, date) pair with one optional
/// cell per selected machine, in selection order. `None` renders blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRow {
    pub shift_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub cells: Vec<Option<MetricCell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_report_decodes_wire_shape() {
        let json = r#"{
            "machines": [{
                "machine_id": "M1",
                "shifts": [{
                    "shift_name": "Shift 1",
                    "date": "2024-02-01",
                    "shift_start_time": "06:00",
                    "shift_end_time": "14:00",
                    "production_count": 410,
                    "target_production": 500,
                    "total": 410
                }]
            }]
        }"#;
        let report: TableReportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(report.machines.len(), 1);
        assert_eq!(report.machines[0].shifts[0].production_count, 410);
    }

    #[test]
    fn test_shift_wise_label_falls_back_to_number() {
        let mut shift = ShiftWiseShift {
            shift_name: Some("Night".into()),
            shift_number: Some(3),
            ..Default::default()
        };
        assert_eq!(shift.label(), "Night");
        shift.shift_name = None;
        assert_eq!(shift.label(), "Shift 3");
        shift.shift_number = None;
        assert_eq!(shift.label(), "Shift N/A");
    }

    #[test]
    fn test_shift_wise_date_strips_time_portion() {
        let shift = ShiftWiseShift {
            shift_date: "2024-02-01T06:00:00Z".into(),
            ..Default::default()
        };
        assert_eq!(shift.date(), "2024-02-01");
    }

    #[test]
    fn test_missing_fields_default() {
        let report: TableReportResponse = serde_json::from_str("{}").unwrap();
        assert!(report.machines.is_empty());
    }
}
