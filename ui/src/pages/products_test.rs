use super::*;

#[test]
fn products_renders_heading_literal() {
    let html = view! { <ProductsPage/> }.to_html();
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("Products Management"));
}

#[test]
fn products_renders_description_literal() {
    let html = view! { <ProductsPage/> }.to_html();
    assert_eq!(html.matches("<p").count(), 1);
    assert!(html.contains("Manage your product inventory."));
}

#[test]
fn products_literals_match_contract() {
    assert_eq!(TITLE, "Products Management");
    assert_eq!(DESCRIPTION, "Manage your product inventory.");
}
