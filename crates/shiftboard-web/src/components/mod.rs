//! Leptos UI components

mod header;
mod machine_picker;
mod report_table;
mod sidebar;

pub use header::Header;
pub use machine_picker::MachinePicker;
pub use report_table::ReportTableView;
pub use sidebar::Sidebar;
