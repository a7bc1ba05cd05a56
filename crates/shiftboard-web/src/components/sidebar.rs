//! Sidebar navigation component with inline SVG icons

use leptos::prelude::*;
use leptos_router::components::A;

/// Sidebar with navigation menu
#[component]
pub fn Sidebar(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    // Close sidebar when clicking a link (mobile)
    let close_sidebar = move |_| {
        set_sidebar_open.set(false);
    };

    view! {
        <>
            // Backdrop overlay for mobile
            <Show when=move || sidebar_open.get()>
                <div
                    class="sidebar-backdrop"
                    on:click=move |_| set_sidebar_open.set(false)
                ></div>
            </Show>

            <aside class="sidebar" class:sidebar-open=move || sidebar_open.get()>
                <button
                    class="sidebar-close"
                    on:click=move |_| set_sidebar_open.set(false)
                    aria-label="Close sidebar"
                >
                    "✕"
                </button>

                <nav class="nav">
                    <ul class="nav-list">
                        <li class="nav-item">
                            <A href="/" attr:class="sidebar-link" on:click=close_sidebar>
                                <span class="sidebar-link-icon">
                                    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M8 6h13"/>
                                        <path d="M8 12h13"/>
                                        <path d="M8 18h13"/>
                                        <path d="M3 6h.01"/>
                                        <path d="M3 12h.01"/>
                                        <path d="M3 18h.01"/>
                                    </svg>
                                </span>
                                <span class="sidebar-link-label">"Shift Report"</span>
                            </A>
                        </li>
                        <li class="nav-item">
                            <A href="/reports" attr:class="sidebar-link" on:click=close_sidebar>
                                <span class="sidebar-link-icon">
                                    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                                        <polyline points="7 10 12 15 17 10"/>
                                        <line x1="12" x2="12" y1="15" y2="3"/>
                                    </svg>
                                </span>
                                <span class="sidebar-link-label">"Report Downloads"</span>
                            </A>
                        </li>
                        <li class="nav-item">
                            <A href="/devices" attr:class="sidebar-link" on:click=close_sidebar>
                                <span class="sidebar-link-icon">
                                    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <rect width="20" height="8" x="2" y="2" rx="2" ry="2"/>
                                        <rect width="20" height="8" x="2" y="14" rx="2" ry="2"/>
                                        <line x1="6" x2="6.01" y1="6" y2="6"/>
                                        <line x1="6" x2="6.01" y1="18" y2="18"/>
                                    </svg>
                                </span>
                                <span class="sidebar-link-label">"Devices"</span>
                            </A>
                        </li>
                    </ul>
                </nav>
            </aside>
        </>
    }
}
