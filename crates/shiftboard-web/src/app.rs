//! Main Leptos App component with SPA router and route protection

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use shiftboard_core::RouteAccess;

use crate::components::{Header, Sidebar};
use crate::pages::{Devices, Login, Reports, ShiftReport};
use crate::session::{provide_session, use_session};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let session = provide_session();

    // Mobile sidebar state
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <Router>
            <div class="app">
                <Header sidebar_open set_sidebar_open />
                <div class="layout">
                    <Show when=move || session.is_authenticated()>
                        <Sidebar sidebar_open set_sidebar_open />
                    </Show>
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/login") view=Login />
                            <Route
                                path=path!("/")
                                view=|| view! {
                                    <RequireAuth>
                                        <ShiftReport />
                                    </RequireAuth>
                                }
                            />
                            <Route
                                path=path!("/reports")
                                view=|| view! {
                                    <RequireAuth>
                                        <Reports />
                                    </RequireAuth>
                                }
                            />
                            <Route
                                path=path!("/devices")
                                view=|| view! {
                                    <RequireAuth>
                                        <Devices />
                                    </RequireAuth>
                                }
                            />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Route guard: renders its children only while the session carries a
/// token, otherwise redirects to the login page. The decision reads the
/// session signal, so it re-runs on every navigation and on logout -
/// nothing is cached across route changes.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.route_access() == RouteAccess::Grant
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
