//! Registration page component.

use dioxus::prelude::*;

use agri_types::Role;

use crate::app::components::AuthLayout;
use crate::app::context::use_auth;
use crate::app::Route;
use crate::views::auth_forms::RegisterForm;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = navigator();

    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        error.set(None);

        let request = match form.read().validate() {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        let auth = auth.clone();
        loading.set(true);
        spawn(async move {
            match auth.register(&request).await {
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
        AuthLayout { title: "Register".to_string(),
            form { onsubmit: submit,
                if let Some(msg) = error() {
                    p { class: "form-error", role: "alert", "{msg}" }
                }
                label {
                    "Username"
                    input {
                        r#type: "text",
                        required: true,
                        value: "{current.username}",
                        oninput: move |e| form.with_mut(|f| f.username = e.value()),
                    }
                }
                label {
                    "Email"
                    input {
                        r#type: "email",
                        required: true,
                        value: "{current.email}",
                        oninput: move |e| form.with_mut(|f| f.email = e.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        required: true,
                        autocomplete: "new-password",
                        value: "{current.password}",
                        oninput: move |e| form.with_mut(|f| f.password = e.value()),
                    }
                }
                label {
                    "Role"
                    select {
                        onchange: move |e| form.with_mut(|f| f.role = Role::from(e.value().as_str())),
                        for role in [Role::Technician, Role::Admin] {
                            option {
                                value: "{role}",
                                selected: role == current.role,
                                {role.label()}
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    aria_busy: if loading() { "true" } else { "false" },
                    "Create account"
                }
            }
            footer {
                small {
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
