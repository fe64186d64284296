//! Login page component.

use dioxus::prelude::*;

use crate::app::components::AuthLayout;
use crate::app::context::use_auth;
use crate::app::Route;
use crate::views::auth_forms::LoginForm;

/// Login page. Reachable with or without a session.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = navigator();

    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        error.set(None);

        let credentials = match form.read().validate() {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        let auth = auth.clone();
        loading.set(true);
        spawn(async move {
            match auth.login(&credentials).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(failure) => error.set(Some(failure.message)),
            }
            loading.set(false);
        });
    };

    let current = form();

    rsx! {
        AuthLayout { title: "Login".to_string(),
            form { onsubmit: submit,
                if let Some(msg) = error() {
                    p { class: "form-error", role: "alert", "{msg}" }
                }
                label {
                    "Username"
                    input {
                        r#type: "text",
                        name: "username",
                        required: true,
                        autocomplete: "username",
                        value: "{current.username}",
                        oninput: move |e| form.with_mut(|f| f.username = e.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        name: "password",
                        required: true,
                        autocomplete: "current-password",
                        value: "{current.password}",
                        oninput: move |e| form.with_mut(|f| f.password = e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    aria_busy: if loading() { "true" } else { "false" },
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
            footer {
                small {
                    "No account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
