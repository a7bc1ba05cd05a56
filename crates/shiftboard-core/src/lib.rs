//! shiftboard-core - Core library for shiftboard
//!
//! Provides the data model, report reconciliation (date validation,
//! sparse join, view state machine) and CSV/PDF export for the
//! production-monitoring dashboard.

pub mod error;
pub mod export;
pub mod models;
pub mod report;

pub use error::{Error, ValidationError};
pub use export::{report_to_csv, report_to_pdf, CSV_FILENAME, PDF_FILENAME};
pub use models::{RouteAccess, Session, TOKEN_STORAGE_KEY};
pub use report::{
    build_table, filter_shift_wise, validate_selection, DateRange, ReportTable, ReportView,
    ViewState,
};
