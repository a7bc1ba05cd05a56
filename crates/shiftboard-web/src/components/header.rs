//! Header component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

/// Header with logo, mobile hamburger menu and the logout action
#[component]
pub fn Header(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <header class="header">
            <button
                class="hamburger"
                on:click=move |_| set_sidebar_open.update(|v| *v = !*v)
                aria-label="Toggle sidebar"
                aria-expanded=move || sidebar_open.get().to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <div class="header-content">
                <h1 class="logo">"shiftboard"</h1>
                <p class="subtitle">"Production Monitoring"</p>
            </div>

            <Show when=move || session.is_authenticated()>
                <button class="logout-button" on:click=logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
