//! Orders management page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

pub const TITLE: &str = "Orders Management";
pub const DESCRIPTION: &str = "View and manage customer orders.";

/// Orders page — static copy describing order viewing and management.
#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <PageShell title=TITLE.to_owned() description=DESCRIPTION.to_owned()/>
    }
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
