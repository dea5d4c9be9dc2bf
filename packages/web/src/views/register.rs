//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

use crate::Route;

/// Register page component. Sends the user to the login page once the
/// backend accepts the registration.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        main {
            class: "container my-4",
            RegisterForm {
                on_registered: move |_| {
                    tracing::info!("registration accepted, redirecting to login");
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
