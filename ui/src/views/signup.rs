use dioxus::prelude::*;

use api::auth::AuthClient;

use crate::routes;

#[component]
pub fn Signup() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let password_value = password();

        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            error.set(Some("All fields are required".to_string()));
            return;
        }

        busy.set(true);
        error.set(None);
        spawn(async move {
            let client = AuthClient::from_env();
            match client
                .register(&name_value, &email_value, &password_value)
                .await
            {
                Ok(()) => {
                    println!("[auth] account created for {email_value}");
                    routes::go_login();
                }
                Err(err) => {
                    eprintln!("[auth] signup failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { class: "page__title", "Sign Up" }

            form { class: "auth-form", onsubmit: on_submit,
                label { class: "auth-form__label", r#for: "signup-name", "Name" }
                input {
                    id: "signup-name",
                    class: "auth-form__input",
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    class: "auth-form__input",
                    r#type: "email",
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
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
                    if busy() { "Creating account..." } else { "Sign Up" }
                }
            }
        }
    }
}
