use super::*;

#[test]
fn dashboard_renders_heading_literal() {
    let html = view! { <DashboardPage/> }.to_html();
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("OrderStream Dashboard"));
}

#[test]
fn dashboard_renders_description_literal() {
    let html = view! { <DashboardPage/> }.to_html();
    assert_eq!(html.matches("<p").count(), 1);
    assert!(html.contains("Welcome to the OrderStream admin dashboard."));
}

#[test]
fn dashboard_literals_match_contract() {
    assert_eq!(TITLE, "OrderStream Dashboard");
    assert_eq!(DESCRIPTION, "Welcome to the OrderStream admin dashboard.");
}
