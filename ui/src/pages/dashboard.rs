//! Dashboard landing page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

pub const TITLE: &str = "OrderStream Dashboard";
pub const DESCRIPTION: &str = "Welcome to the OrderStream admin dashboard.";

/// Dashboard page — static welcome copy inside the shared shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageShell title=TITLE.to_owned() description=DESCRIPTION.to_owned()/>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
