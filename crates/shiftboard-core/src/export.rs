//! Export of the reconciled report to CSV and PDF
//!
//! Both formats are derived from the currently displayed [`ReportTable`];
//! machine columns/sections follow the user's selection order and rows keep
//! the source order of the fetch.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::Error;
use crate::models::MetricCell;
use crate::report::ReportTable;

/// Download name of the CSV artifact.
pub const CSV_FILENAME: &str = "Shift_Table.csv";
/// Download name of the PDF artifact.
pub const PDF_FILENAME: &str = "shift_report.pdf";

/// Render the report as CSV text.
///
/// Two header rows: the first names the fixed shift/date columns and one
/// machine-id block per selected machine; the second labels each block's
/// `count,target,total` columns. Then one data row per table row, blanks
/// where a machine has no record for that shift.
pub fn report_to_csv(table: &ReportTable) -> String {
    let mut header = vec![
        "SHIFT".to_string(),
        "Date".to_string(),
        "From".to_string(),
        "To".to_string(),
    ];
    let mut sub_header = vec![String::new(); 4];

    for machine_id in &table.machine_ids {
        header.push(machine_id.clone());
        header.push(String::new());
        header.push(String::new());
        sub_header.push("count".to_string());
        sub_header.push("target".to_string());
        sub_header.push("total".to_string());
    }

    // UTF-8 BOM for Excel compatibility
    let mut csv = String::from("\u{FEFF}");
    push_row(&mut csv, &header);
    push_row(&mut csv, &sub_header);

    for row in &table.rows {
        let mut cells = vec![
            row.shift_name.clone(),
            row.date.clone(),
            row.start_time.clone(),
            row.end_time.clone(),
        ];
        for cell in &row.cells {
            match cell {
                Some(MetricCell { count, target, total }) => {
                    cells.push(count.to_string());
                    cells.push(target.to_string());
                    cells.push(total.to_string());
                }
                None => cells.extend([String::new(), String::new(), String::new()]),
            }
        }
        push_row(&mut csv, &cells);
    }

    csv
}

fn push_row(csv: &mut String, cells: &[String]) {
    let escaped: Vec<_> = cells
        .iter()
        .map(|cell| {
            // Quote cells containing comma, quote, or newline
            if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.clone()
            }
        })
        .collect();
    csv.push_str(&escaped.join(","));
    csv.push('\n');
}

// A4 portrait geometry, all in millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 6.0;
const SECTION_GAP: f32 = 10.0;

// Column origins for the seven report columns.
const COLUMNS: [(f32, &str); 7] = [
    (14.0, "Shift"),
    (48.0, "Date"),
    (78.0, "From"),
    (100.0, "To"),
    (122.0, "Count"),
    (148.0, "Target"),
    (174.0, "Total"),
];

fn mm(v: f32) -> Mm {
    Mm(v.into())
}

/// Render the report as a PDF document, one section per selected machine.
///
/// Each section is a heading, a column-header row and one data row per
/// shift the machine has a record for. A row is never split across pages:
/// when the next row (or a new section's heading block) does not fit, the
/// cursor moves to a fresh page first.
pub fn report_to_pdf(table: &ReportTable) -> Result<Vec<u8>, Error> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Production Report", mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "report");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::PdfRender(format!("{e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::PdfRender(format!("{e:?}")))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    layer.use_text("Production Report", 14.0, mm(MARGIN), mm(y - 4.0), &bold);
    y -= 14.0;

    for (index, machine_id) in table.machine_ids.iter().enumerate() {
        let rows: Vec<_> = table.rows_for_machine(index).collect();

        // Heading, column header and first row stay together.
        let needed = SECTION_GAP + 3.0 * ROW_HEIGHT;
        if y - needed < MARGIN {
            let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "report");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN;
        }

        layer.use_text(
            format!("Machine ID : {}", machine_id),
            11.0,
            mm(MARGIN),
            mm(y - 4.0),
            &bold,
        );
        y -= SECTION_GAP;

        for (x, title) in COLUMNS {
            layer.use_text(title, 9.0, mm(x), mm(y - 4.0), &bold);
        }
        y -= ROW_HEIGHT;

        if rows.is_empty() {
            layer.use_text("No data for the selected range", 9.0, mm(MARGIN), mm(y - 4.0), &font);
            y -= ROW_HEIGHT;
            continue;
        }

        for (row, cell) in rows {
            if y - ROW_HEIGHT < MARGIN {
                let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "report");
                layer = doc.get_page(page).get_layer(page_layer);
                y = PAGE_HEIGHT - MARGIN;
                for (x, title) in COLUMNS {
                    layer.use_text(title, 9.0, mm(x), mm(y - 4.0), &bold);
                }
                y -= ROW_HEIGHT;
            }

            let values = [
                row.shift_name.clone(),
                row.date.clone(),
                row.start_time.clone(),
                row.end_time.clone(),
                cell.count.to_string(),
                cell.target.to_string(),
                cell.total.to_string(),
            ];
            for ((x, _), value) in COLUMNS.iter().zip(values) {
                layer.use_text(value, 9.0, mm(*x), mm(y - 4.0), &font);
            }
            y -= ROW_HEIGHT;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| Error::PdfRender(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MachineReport, ShiftSlot, TableReportResponse};
    use crate::report::build_table;

    fn sample_table() -> ReportTable {
        let response = TableReportResponse {
            machines: vec![MachineReport {
                machine_id: "M1".into(),
                shifts: vec![ShiftSlot {
                    shift_name: "Shift 1".into(),
                    date: "2024-02-01".into(),
                    shift_start_time: "06:00".into(),
                    shift_end_time: "14:00".into(),
                    production_count: 410,
                    target_production: 500,
                    total: 410,
                }],
            }],
        };
        build_table(&response, &["M1".into(), "M2".into()])
    }

    #[test]
    fn test_csv_has_two_headers_and_one_row_per_table_row() {
        let table = sample_table();
        let csv = report_to_csv(&table);
        let lines: Vec<_> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 2 + table.rows.len());
    }

    #[test]
    fn test_csv_machine_blocks_follow_selection_order() {
        let table = sample_table();
        let csv = report_to_csv(&table);
        let lines: Vec<_> = csv.trim_start_matches('\u{FEFF}').lines().collect();

        let header: Vec<_> = lines[0].split(',').collect();
        assert_eq!(&header[..4], &["SHIFT", "Date", "From", "To"]);
        assert_eq!(header[4], "M1");
        assert_eq!(header[7], "M2");

        let sub: Vec<_> = lines[1].split(',').collect();
        assert_eq!(&sub[4..7], &["count", "target", "total"]);

        // M1 populated, M2 blank on the only row.
        let row: Vec<_> = lines[2].split(',').collect();
        assert_eq!(row.len(), 4 + 3 * table.machine_ids.len());
        assert_eq!(&row[4..7], &["410", "500", "410"]);
        assert_eq!(&row[7..10], &["", "", ""]);
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let mut table = sample_table();
        table.rows[0].shift_name = "Shift \"A\", late".into();
        let csv = report_to_csv(&table);
        assert!(csv.contains("\"Shift \"\"A\"\", late\""));
    }

    #[test]
    fn test_pdf_renders_nonempty_document() {
        let table = sample_table();
        let bytes = report_to_pdf(&table).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
