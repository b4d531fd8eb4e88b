//! Products management page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

pub const TITLE: &str = "Products Management";
pub const DESCRIPTION: &str = "Manage your product inventory.";

/// Products page — static copy describing inventory management.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <PageShell title=TITLE.to_owned() description=DESCRIPTION.to_owned()/>
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
