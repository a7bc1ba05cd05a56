//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::session::use_session;

/// Username/password form. A successful login stores the token in the
/// session context and navigates to the dashboard; a failure leaves prior
/// state untouched and shows the error inline.
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("enter username and password".to_string()));
            return;
        }

        let api = ApiClient::new(session);
        let navigate = navigate.clone();
        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api.login(&user, &pass).await {
                Ok(response) => {
                    session.store(&response.token);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    log::warn!("login failed: {}", err);
                    set_error.set(Some("login failed, check your credentials".to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="page login-page">
                <div class="login-card">
                    <h2>"Sign in"</h2>
                    <form on:submit=on_submit.clone()>
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />

                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <Show when=move || error.get().is_some()>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>

                        <button type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
