//! Device details page: list, add, edit and delete devices

use leptos::prelude::*;
use leptos::task::spawn_local;

use shiftboard_core::models::Device;

use crate::api::ApiClient;
use crate::session::use_session;

/// Device CRUD view over `devices/device/`.
#[component]
pub fn Devices() -> impl IntoView {
    let session = use_session();

    // Bump to refetch after create/update/delete
    let (version, set_version) = signal(0u32);
    let devices = LocalResource::new(move || {
        let _ = version.get();
        let api = ApiClient::new(session);
        async move { api.devices().await }
    });

    // Some(device) while the add/edit modal is open; a missing id means add.
    let modal: RwSignal<Option<Device>> = RwSignal::new(None);
    let (error, set_error) = signal(None::<String>);

    let save = move |_| {
        let Some(device) = modal.get() else {
            return;
        };
        let api = ApiClient::new(session);
        set_error.set(None);

        spawn_local(async move {
            let result = if device.id.is_some() {
                api.update_device(&device).await.map(|_| ())
            } else {
                api.create_device(&device).await.map(|_| ())
            };
            match result {
                Ok(()) => {
                    modal.set(None);
                    set_version.update(|v| *v += 1);
                }
                Err(err) => {
                    log::error!("failed to save device: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let delete = move |id: u64| {
        let api = ApiClient::new(session);
        set_error.set(None);
        spawn_local(async move {
            match api.delete_device(id).await {
                Ok(()) => set_version.update(|v| *v += 1),
                Err(err) => {
                    log::error!("failed to delete device: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="page devices-page">
            <div class="page-header">
                <h2>"Device Details"</h2>
                <button class="add-button" on:click=move |_| modal.set(Some(Device::default()))>
                    "Add Device"
                </button>
            </div>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <Suspense fallback=move || {
                view! { <div class="loading">"Loading devices..."</div> }
            }>
                {move || {
                    devices
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(list) => {
                                let list = list.clone();
                                view! {
                                    <table class="device-table">
                                        <thead>
                                            <tr>
                                                <th>"Si No"</th>
                                                <th>"Device Name"</th>
                                                <th>"Device Token"</th>
                                                <th>"Hardware"</th>
                                                <th>"Software"</th>
                                                <th>"Protocol"</th>
                                                <th>"Pub Topic"</th>
                                                <th>"Sub Topic"</th>
                                                <th>"API Path"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, device)| {
                                                    let edit_device = device.clone();
                                                    let id = device.id;
                                                    view! {
                                                        <tr>
                                                            <td>{index + 1}</td>
                                                            <td>{device.device_name.clone()}</td>
                                                            <td>{device.device_token.clone()}</td>
                                                            <td>{device.hardware_version.clone()}</td>
                                                            <td>{device.software_version.clone()}</td>
                                                            <td>{device.protocol.clone()}</td>
                                                            <td>{device.pub_topic.clone()}</td>
                                                            <td>{device.sub_topic.clone()}</td>
                                                            <td>{device.api_path.clone()}</td>
                                                            <td>
                                                                <button
                                                                    class="row-button"
                                                                    on:click=move |_| {
                                                                        modal.set(Some(edit_device.clone()))
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="row-button danger"
                                                                    on:click=move |_| {
                                                                        if let Some(id) = id {
                                                                            delete(id);
                                                                        }
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-state">
                                        <p>"Failed to load devices"</p>
                                        <p class="hint">{err.to_string()}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || modal.get().is_some()>
                <div class="modal-backdrop" on:click=move |_| modal.set(None)></div>
                <div class="modal">
                    <h3>
                        {move || {
                            if modal.with(|m| m.as_ref().and_then(|d| d.id).is_some()) {
                                "Update Device"
                            } else {
                                "Add Device"
                            }
                        }}
                    </h3>

                    <div class="modal-form">
                        <DeviceField
                            label="Device Name"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.device_name.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.device_name = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Device Token"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.device_token.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.device_token = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Hardware Version"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.hardware_version.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.hardware_version = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Software Version"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.software_version.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.software_version = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Protocol"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.protocol.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.protocol = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Pub Topic"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.pub_topic.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.pub_topic = v;
                                }
                            })
                        />
                        <DeviceField
                            label="Sub Topic"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.sub_topic.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.sub_topic = v;
                                }
                            })
                        />
                        <DeviceField
                            label="API Path"
                            value=Signal::derive(move || {
                                modal.with(|m| m.as_ref().map(|d| d.api_path.clone()).unwrap_or_default())
                            })
                            on_change=move |v| modal.update(|m| {
                                if let Some(d) = m {
                                    d.api_path = v;
                                }
                            })
                        />
                    </div>

                    <div class="modal-actions">
                        <button class="row-button" on:click=move |_| modal.set(None)>
                            "Cancel"
                        </button>
                        <button class="row-button primary" on:click=save.clone()>
                            "Save"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Labeled text input bound to one device field.
#[component]
fn DeviceField(
    label: &'static str,
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="device-field">
            {label}
            <input
                type="text"
                prop:value=value
                on:input=move |ev| on_change(event_target_value(&ev))
            />
        </label>
    }
}
