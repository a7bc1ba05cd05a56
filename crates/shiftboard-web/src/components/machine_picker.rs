//! Machine selection grid grouped by machine group
//!
//! The selection is an ordered list, not a set: export columns follow the
//! order machines were ticked in, so toggling pushes/removes rather than
//! flipping a flag.

use leptos::prelude::*;
use shiftboard_core::models::MachineGroup;

/// Checkbox picker over the machine-group tree.
#[component]
pub fn MachinePicker(
    groups: Signal<Vec<MachineGroup>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="machine-picker">
            <For
                each=move || groups.get()
                key=|group| group.group_id
                children=move |group| {
                    view! {
                        <div class="machine-group">
                            <h5 class="machine-group-name">{group.group_name.clone()}</h5>
                            <ul class="machine-list">
                                <For
                                    each=move || group.machines.clone()
                                    key=|machine| machine.machine_id.clone()
                                    children=move |machine| {
                                        let id = machine.machine_id.clone();
                                        let checked_id = id.clone();
                                        let toggle_id = id.clone();
                                        view! {
                                            <li class="machine-item">
                                                <label>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            selected.with(|s| s.contains(&checked_id))
                                                        }
                                                        on:change=move |ev| {
                                                            let id = toggle_id.clone();
                                                            if event_target_checked(&ev) {
                                                                selected.update(|s| {
                                                                    if !s.contains(&id) {
                                                                        s.push(id);
                                                                    }
                                                                });
                                                            } else {
                                                                selected.update(|s| {
                                                                    s.retain(|m| m != &id);
                                                                });
                                                            }
                                                        }
                                                    />
                                                    <span class="machine-name">
                                                        {machine.machine_name.clone()}
                                                        " ("
                                                        {id.clone()}
                                                        ")"
                                                    </span>
                                                </label>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    }
                }
            />
        </div>
    }
}
