//! shiftboard-web - Leptos frontend for the production-monitoring dashboard

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod session;
pub mod utils;

pub use app::App;
