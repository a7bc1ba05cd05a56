//! Data models for shiftboard

mod device;
mod report;
mod session;

pub use device::{Device, Machine, MachineGroup};
pub use report::{
    LoginRequest, LoginResponse, MachineReport, MetricCell, ProductionMonitorResponse, ReportRow,
    ShiftGroup, ShiftMachine, ShiftSlot, ShiftWiseShift, TableReportRequest, TableReportResponse,
};
pub use session::{RouteAccess, Session, TOKEN_STORAGE_KEY};
