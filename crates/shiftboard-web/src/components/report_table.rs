//! Reconciled report table component

use leptos::prelude::*;
use shiftboard_core::ReportTable;

/// Render the reconciled table: fixed shift/date columns, then one
/// count/target/total block per selected machine. Blank cells mean the
/// machine has no record for that shift.
#[component]
pub fn ReportTableView(table: Signal<ReportTable>) -> impl IntoView {
    view! {
        <div class="report-table-wrap">
            <table class="report-table">
                <thead>
                    <tr>
                        <th>"Shift"</th>
                        <th>"Date"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        {move || {
                            table
                                .get()
                                .machine_ids
                                .iter()
                                .map(|id| view! { <th colspan="3" class="machine-col">{id.clone()}</th> })
                                .collect_view()
                        }}
                    </tr>
                    <tr>
                        <th></th>
                        <th></th>
                        <th></th>
                        <th></th>
                        {move || {
                            table
                                .get()
                                .machine_ids
                                .iter()
                                .map(|_| {
                                    view! {
                                        <th>"Count"</th>
                                        <th>"Target"</th>
                                        <th>"Total"</th>
                                    }
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        table
                            .get()
                            .rows
                            .iter()
                            .map(|row| {
                                let cells = row
                                    .cells
                                    .iter()
                                    .map(|cell| match cell {
                                        Some(c) => view! {
                                            <td>{c.count}</td>
                                            <td>{c.target}</td>
                                            <td>{c.total}</td>
                                        }
                                            .into_any(),
                                        None => view! {
                                            <td></td>
                                            <td></td>
                                            <td></td>
                                        }
                                            .into_any(),
                                    })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td>{row.shift_name.clone()}</td>
                                        <td>{row.date.clone()}</td>
                                        <td>{row.start_time.clone()}</td>
                                        <td>{row.end_time.clone()}</td>
                                        {cells}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
