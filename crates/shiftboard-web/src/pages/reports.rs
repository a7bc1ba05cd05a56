//! Report downloads page: date range + machine selection -> table + exports
//!
//! Drives the core `ReportView` state machine: validation gates the fetch,
//! failures surface instead of vanishing into the console, and responses
//! that lost the race against a newer search are discarded.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use shiftboard_core::{
    build_table, report_to_csv, report_to_pdf, validate_selection, DateRange, ReportTable,
    ReportView, ViewState, CSV_FILENAME, PDF_FILENAME,
};

use crate::api::ApiClient;
use crate::components::{MachinePicker, ReportTableView};
use crate::session::use_session;
use crate::utils::export::{download_bytes, download_text};

/// Report downloads view.
#[component]
pub fn Reports() -> impl IntoView {
    let session = use_session();

    let groups = LocalResource::new(move || {
        let api = ApiClient::new(session);
        async move { api.machine_groups().await }
    });

    // Machine ids in the order the user ticked them; export columns
    // follow this order.
    let selected: RwSignal<Vec<String>> = RwSignal::new(Vec::new());

    let (from_input, set_from_input) = signal(String::new());
    let (to_input, set_to_input) = signal(String::new());

    let report_view: RwSignal<ReportView> = RwSignal::new(ReportView::new());
    let (table, set_table) = signal(ReportTable::default());
    // Messages from export-side validation (empty selection, render failure)
    let (notice, set_notice) = signal(None::<String>);

    let parse_range = move || -> Option<DateRange> {
        let from = NaiveDate::parse_from_str(&from_input.get(), "%Y-%m-%d").ok()?;
        let to = NaiveDate::parse_from_str(&to_input.get(), "%Y-%m-%d").ok()?;
        Some(DateRange::new(from, to))
    };

    let search = move |_| {
        set_notice.set(None);

        let Some(range) = parse_range() else {
            set_notice.set(Some("select both dates".to_string()));
            return;
        };

        // Validation failure: the view enters Failed, no ticket is issued
        // and nothing is fetched.
        let begun = report_view
            .try_update(|v| v.begin_search(&range))
            .unwrap_or(Err(shiftboard_core::ValidationError::DateRangeInverted));
        let Ok(ticket) = begun else {
            return;
        };

        let machine_ids = selected.get();
        let api = ApiClient::new(session);

        spawn_local(async move {
            let request = range.to_request(&machine_ids);
            match api.table_report(&request).await {
                Ok(response) => {
                    let fresh = report_view
                        .try_update(|v| v.resolve(ticket, Ok(())))
                        .unwrap_or(false);
                    // A stale response never overwrites newer data.
                    if fresh {
                        set_table.set(build_table(&response, &machine_ids));
                    }
                }
                Err(err) => {
                    log::error!("table report fetch failed: {}", err);
                    report_view.try_update(|v| v.resolve(ticket, Err(err)));
                }
            }
        });
    };

    let exports_enabled =
        move || report_view.with(|v| v.can_export()) && !selected.with(|s| s.is_empty());

    let export_pdf = move |_| {
        if !report_view.with(|v| v.can_export()) {
            return;
        }
        if let Err(err) = validate_selection(&selected.get()) {
            set_notice.set(Some(err.to_string()));
            return;
        }
        set_notice.set(None);
        match report_to_pdf(&table.get()) {
            Ok(bytes) => download_bytes(&bytes, PDF_FILENAME, "application/pdf"),
            Err(err) => set_notice.set(Some(err.to_string())),
        }
    };

    let export_csv = move |_| {
        if !report_view.with(|v| v.can_export()) {
            return;
        }
        if let Err(err) = validate_selection(&selected.get()) {
            set_notice.set(Some(err.to_string()));
            return;
        }
        set_notice.set(None);
        download_text(&report_to_csv(&table.get()), CSV_FILENAME, "text/csv;charset=utf-8;");
    };

    view! {
        <div class="page reports-page">
            <div class="page-header">
                <h2>"Report Downloads"</h2>
            </div>

            <div class="card">
                <div class="card-header">
                    <h4>"Machines"</h4>
                </div>

                <Suspense fallback=move || {
                    view! { <div class="loading">"Loading machines..."</div> }
                }>
                    {move || {
                        groups
                            .get()
                            .map(|result| match result.as_ref() {
                                Ok(groups) => {
                                    let groups = groups.clone();
                                    view! {
                                        <MachinePicker
                                            groups=Signal::derive(move || groups.clone())
                                            selected=selected
                                        />
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <div class="error-state">
                                            <p>"Failed to load machine groups"</p>
                                            <p class="hint">{err.to_string()}</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <div class="filter-row">
                    <label>
                        "From Date"
                        <input
                            type="date"
                            prop:value=from_input
                            on:input=move |ev| set_from_input.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "To Date"
                        <input
                            type="date"
                            prop:value=to_input
                            on:input=move |ev| set_to_input.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="search-button" on:click=search>
                        "Search"
                    </button>
                </div>

                // Validation errors inline, fetch failures as a banner; the
                // previously displayed table stays on screen either way.
                {move || {
                    report_view
                        .with(|v| match v.state() {
                            ViewState::Failed(err) => {
                                let class = if err.is_validation() {
                                    "form-error"
                                } else {
                                    "error-banner"
                                };
                                Some(view! { <p class=class>{err.to_string()}</p> })
                            }
                            _ => None,
                        })
                }}
                {move || notice.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="export-row">
                    <button
                        class="export-button"
                        on:click=export_pdf
                        disabled=move || !exports_enabled()
                    >
                        "Summary Report (PDF)"
                    </button>
                    <button
                        class="export-button"
                        on:click=export_csv
                        disabled=move || !exports_enabled()
                    >
                        "Shiftwise Report (CSV)"
                    </button>
                </div>
            </div>

            {move || {
                if report_view.with(|v| matches!(v.state(), ViewState::Fetching)) {
                    Some(view! { <div class="loading">"Fetching report..."</div> })
                } else {
                    None
                }
            }}

            <Show when=move || !table.get().is_empty()>
                <ReportTableView table=table.into() />
            </Show>
        </div>
    }
}
