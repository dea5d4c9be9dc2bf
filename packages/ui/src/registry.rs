//! Backend client context.

use api::HttpDirectory;
use dioxus::prelude::*;

/// Get the user directory provided by [`RegistryProvider`].
pub fn use_registry() -> HttpDirectory {
    use_context::<HttpDirectory>()
}

/// Provider component that makes the backend client available to the tree.
/// Wrap your app with this component before rendering any form.
#[component]
pub fn RegistryProvider(children: Element) -> Element {
    use_context_provider(|| {
        let directory = HttpDirectory::from_env();
        tracing::debug!(base_url = directory.config().base_url(), "registry configured");
        directory
    });

    rsx! {
        {children}
    }
}
