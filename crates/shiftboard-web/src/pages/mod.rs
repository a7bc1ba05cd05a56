//! Page components

mod devices;
mod login;
mod reports;
mod shift_report;

pub use devices::Devices;
pub use login::Login;
pub use reports::Reports;
pub use shift_report::ShiftReport;
