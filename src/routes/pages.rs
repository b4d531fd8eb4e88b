//! Page handlers for the static admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each handler mounts one UI page: the view is rendered to markup with
//! Leptos SSR and wrapped in a fixed document shell. The views are pure
//! functions of their fixed literals, so every handler is infallible.

use axum::response::Html;
use leptos::prelude::*;
use orderstream_ui::pages as ui;
use orderstream_ui::pages::dashboard::DashboardPage;
use orderstream_ui::pages::orders::OrdersPage;
use orderstream_ui::pages::products::ProductsPage;

/// `GET /` — dashboard page.
pub async fn dashboard() -> Html<String> {
    let body = view! { <DashboardPage/> }.to_html();
    Html(page_document(ui::dashboard::TITLE, &body))
}

/// `GET /orders` — orders management page.
pub async fn orders() -> Html<String> {
    let body = view! { <OrdersPage/> }.to_html();
    Html(page_document(ui::orders::TITLE, &body))
}

/// `GET /products` — products management page.
pub async fn products() -> Html<String> {
    let body = view! { <ProductsPage/> }.to_html();
    Html(page_document(ui::products::TITLE, &body))
}

/// Wrap rendered page markup in the fixed document shell.
///
/// Titles come from the page contract literals, so no escaping is applied.
fn page_document(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n<meta \
         name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n<title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/main.css\"/>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
