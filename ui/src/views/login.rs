use dioxus::prelude::*;

use api::auth::AuthClient;

use crate::core::session::use_session;
use crate::core::storage;
use crate::routes;

// Local shortcut credential: establishes a local session with the admin
// flag set, without touching the remote API. The dashboard itself still
// needs the API for its data.
const ADMIN_EMAIL: &str = "admin@trove-archive.org";
const ADMIN_PASSWORD: &str = "trove-admin";
const ADMIN_LOCAL_TOKEN: &str = "local-admin";

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let session = use_session();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email().trim().to_string();
        let password_value = password();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Both fields are required".to_string()));
            return;
        }

        if email_value == ADMIN_EMAIL && password_value == ADMIN_PASSWORD {
            let mut session = session.clone();
            {
                let mut s = session.write();
                s.login(ADMIN_LOCAL_TOKEN);
                s.mark_admin();
            }
            routes::go_dashboard();
            return;
        }

        busy.set(true);
        error.set(None);
        let mut session = session.clone();
        spawn(async move {
            let client = AuthClient::from_env();
            match client.login(&email_value, &password_value).await {
                Ok(login) => {
                    session.write().login(&login.token);
                    storage::set(storage::CREDITS_KEY, &login.user.credits.to_string());
                    println!("[auth] login ok, {} credits", login.user.credits);
                    routes::go_home();
                }
                Err(err) => {
                    eprintln!("[auth] login failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { class: "page__title", "Log In" }

            form { class: "auth-form", onsubmit: on_submit,
                label { class: "auth-form__label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "auth-form__input",
                    r#type: "email",
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "auth-form__input",
                    r#type: "password",
                    value: "{password()}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "auth-form__error", "{message}" }
                }

                button {
                    class: "auth-form__submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Log In" }
                }
            }
        }
    }
}
