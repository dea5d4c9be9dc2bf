//! Staff registration form.

use dioxus::prelude::*;
use registration::{check_email, submit, Field, FieldInput, RegistrationForm, SubmitOutcome};

use crate::use_registry;

/// Registration form. Calls `on_registered` once the backend confirms the
/// new user; every other outcome leaves the form as it is.
#[component]
pub fn RegisterForm(on_registered: EventHandler<()>) -> Element {
    let registry = use_registry();
    let mut form = use_signal(RegistrationForm::new);

    let check_registry = registry.clone();
    let handle_email_blur = move |_: FocusEvent| {
        let registry = check_registry.clone();
        let email = form.read().draft().email.clone();
        spawn(async move {
            match check_email(&registry, &email).await {
                Ok(check) => form.write().record_email_check(check),
                Err(e) => tracing::warn!("Email uniqueness check failed: {}", e),
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(payload) = form.read().submission() else {
            tracing::debug!("submission blocked by email error");
            return;
        };
        let registry = registry.clone();
        spawn(async move {
            match submit(&registry, &payload).await {
                Ok(SubmitOutcome::Registered) => on_registered.call(()),
                Ok(SubmitOutcome::Rejected { message }) => {
                    tracing::warn!("Registration not accepted: {}", message)
                }
                Err(e) => tracing::error!("Registration request failed: {}", e),
            }
        });
    };

    let draft = form.read().draft().clone();
    let email_error = form.read().email_error().map(str::to_string);

    rsx! {
        div {
            class: "register-form",

            h2 { "Cadastro de Usuário" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    label { r#for: "fullName", "Nome Completo: " }
                    input {
                        r#type: "text",
                        id: "fullName",
                        name: "fullName",
                        class: "form-control",
                        required: true,
                        value: "{draft.full_name}",
                        oninput: text_input(form, Field::FullName),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "crm", "CRM: " }
                    input {
                        r#type: "text",
                        id: "crm",
                        name: "crm",
                        class: "form-control",
                        required: true,
                        value: "{draft.crm}",
                        oninput: text_input(form, Field::Crm),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "birthDate", "Data de Nascimento: " }
                    input {
                        r#type: "text",
                        id: "birthDate",
                        name: "birthDate",
                        class: "form-control",
                        placeholder: "DD/MM/AAAA",
                        required: true,
                        value: "{draft.birth_date}",
                        oninput: text_input(form, Field::BirthDate),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "email", "E-mail: " }
                    input {
                        r#type: "email",
                        id: "email",
                        name: "email",
                        class: "form-control",
                        required: true,
                        value: "{draft.email}",
                        oninput: text_input(form, Field::Email),
                        onblur: handle_email_blur,
                    }
                    if let Some(err) = email_error {
                        p { class: "text-danger", "{err}" }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "password", "Senha: " }
                    input {
                        r#type: "password",
                        id: "password",
                        name: "password",
                        class: "form-control",
                        required: true,
                        value: "{draft.password}",
                        oninput: text_input(form, Field::Password),
                    }
                }

                div {
                    class: "form-group form-check",
                    input {
                        r#type: "checkbox",
                        id: "isAdmin",
                        name: "isAdmin",
                        class: "form-check-input",
                        checked: draft.is_admin,
                        onchange: move |evt: FormEvent| {
                            form.write().apply(Field::IsAdmin, FieldInput::Checked(evt.checked()));
                        },
                    }
                    label {
                        class: "form-check-label",
                        r#for: "isAdmin",
                        "Cadastrar como Administrador"
                    }
                }

                if draft.shows_matricula() {
                    div {
                        class: "form-group",
                        label { r#for: "matricula", "Matrícula" }
                        input {
                            r#type: "text",
                            id: "matricula",
                            name: "matricula",
                            class: "form-control",
                            required: true,
                            value: "{draft.matricula}",
                            oninput: text_input(form, Field::Matricula),
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    "Registrar"
                }
            }
        }
    }
}

/// `oninput` handler running the field's mask. When the stored value differs
/// from what the browser holds (rejected or reformatted edit) the element is
/// rewritten, since an unchanged signal does not re-patch the DOM.
fn text_input(
    mut form: Signal<RegistrationForm>,
    field: Field,
) -> impl FnMut(FormEvent) + 'static {
    move |evt: FormEvent| {
        let raw = evt.value();
        let stored = {
            let mut state = form.write();
            state.apply(field, FieldInput::Text(raw.clone()));
            state.draft().text(field).to_string()
        };
        if stored != raw {
            sync_input(field, &stored);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn sync_input(field: Field, value: &str) {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(field.name()))
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value(value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sync_input(_field: Field, _value: &str) {}
