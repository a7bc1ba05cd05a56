//! Shift report page: per-shift production tables filtered by machine/date

use chrono::NaiveDate;
use leptos::prelude::*;

use shiftboard_core::filter_shift_wise;
use shiftboard_core::models::ShiftWiseShift;

use crate::api::ApiClient;
use crate::session::use_session;

/// Shift report view over the production-monitor feed.
///
/// Shows every shift until a machine and a date are chosen; the search
/// button then applies a client-side filter (no refetch).
#[component]
pub fn ShiftReport() -> impl IntoView {
    let session = use_session();

    let monitor = LocalResource::new(move || {
        let api = ApiClient::new(session);
        async move { api.production_monitor().await }
    });
    let machines = LocalResource::new(move || {
        let api = ApiClient::new(session);
        async move { api.machines().await }
    });

    let (machine_filter, set_machine_filter) = signal(String::new());
    let (date_input, set_date_input) = signal(String::new());
    // Filter in effect, set on search only
    let (applied, set_applied) = signal(None::<(String, NaiveDate)>);

    let search = move |_| {
        let machine = machine_filter.get();
        let date = NaiveDate::parse_from_str(&date_input.get(), "%Y-%m-%d").ok();
        if let (false, Some(date)) = (machine.is_empty(), date) {
            set_applied.set(Some((machine, date)));
        }
    };

    let filtered = Memo::new(move |_| {
        monitor
            .get()
            .and_then(|result| result.as_ref().ok().cloned())
            .map(|data| match applied.get() {
                Some((machine, date)) => filter_shift_wise(&data, &machine, date),
                None => data.shift_wise_data.clone(),
            })
    });

    view! {
        <div class="page shift-report-page">
            <div class="page-header">
                <h2>"Shift Report"</h2>
            </div>

            <div class="filter-row">
                <select
                    aria-label="Select Machine"
                    on:change=move |ev| set_machine_filter.set(event_target_value(&ev))
                >
                    <option value="">"Select Machine"</option>
                    {move || {
                        machines
                            .get()
                            .and_then(|result| result.as_ref().ok().cloned())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|m| {
                                view! { <option value=m.machine_name.clone()>{m.machine_name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>

                <input
                    type="date"
                    prop:value=date_input
                    on:input=move |ev| set_date_input.set(event_target_value(&ev))
                />

                <button
                    class="search-button"
                    on:click=search
                    disabled=move || {
                        machine_filter.get().is_empty() || date_input.get().is_empty()
                    }
                >
                    "Search"
                </button>
            </div>

            <Suspense fallback=move || {
                view! { <div class="loading">"Loading shift data..."</div> }
            }>
                {move || {
                    monitor
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(_) => {
                                let shifts = filtered.get().unwrap_or_default();
                                if shifts.is_empty() {
                                    view! {
                                        <p class="empty-state">
                                            "No data available for the selected machine and date."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    shifts
                                        .into_iter()
                                        .map(|shift| view! { <ShiftCard shift /> })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-state">
                                        <p>"Failed to load shift data"</p>
                                        <p class="hint">{err.to_string()}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One shift rendered as a card with a row per machine group.
#[component]
fn ShiftCard(shift: ShiftWiseShift) -> impl IntoView {
    let label = shift.label();
    let date = shift.date().to_string();
    let start = shift.shift_start_time.clone();
    let end = shift.shift_end_time.clone();

    view! {
        <div class="card shift-card">
            <div class="card-header">
                <h5>{label}</h5>
                <span class="shift-date">{date}</span>
            </div>
            <table class="shift-table">
                <thead>
                    <tr>
                        <th>"Si.No"</th>
                        <th>"Group"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Production Count"</th>
                    </tr>
                </thead>
                <tbody>
                    {shift
                        .groups
                        .iter()
                        .enumerate()
                        .map(|(index, group)| {
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{group.group_name.clone()}</td>
                                    <td>{start.clone()}</td>
                                    <td>{end.clone()}</td>
                                    <td>{group.total_production_count_by_group}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
