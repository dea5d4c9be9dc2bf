//! Landing page at `/`.
//!
//! The sign-in flow is served by the backend; this view only points new
//! staff at the registration form.

use dioxus::prelude::*;

use crate::Route;

/// Login landing component.
#[component]
pub fn Login() -> Element {
    rsx! {
        main {
            class: "container my-4",
            h2 { "Entrar" }
            p {
                "Ainda não tem conta? "
                Link { to: Route::Register {}, "Cadastre-se" }
            }
        }
    }
}
