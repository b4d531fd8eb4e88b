use super::*;

#[tokio::test]
async fn dashboard_document_contains_contract_literals() {
    let Html(html) = dashboard().await;
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("OrderStream Dashboard"));
    assert!(html.contains("Welcome to the OrderStream admin dashboard."));
}

#[tokio::test]
async fn orders_document_contains_contract_literals() {
    let Html(html) = orders().await;
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("Orders Management"));
    assert!(html.contains("View and manage customer orders."));
}

#[tokio::test]
async fn products_document_contains_contract_literals() {
    let Html(html) = products().await;
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("Products Management"));
    assert!(html.contains("Manage your product inventory."));
}

#[test]
fn page_document_is_a_complete_html_document() {
    let doc = page_document("Orders Management", "<div>body</div>");
    assert!(doc.starts_with("<!doctype html>"));
    assert!(doc.contains("<title>Orders Management</title>"));
    assert!(doc.contains("<link rel=\"stylesheet\" href=\"/assets/main.css\"/>"));
    assert!(doc.contains("<div>body</div>"));
    assert!(doc.ends_with("</html>\n"));
}

#[tokio::test]
async fn page_documents_share_the_document_shell() {
    let Html(dash) = dashboard().await;
    let Html(orders_page) = orders().await;
    let head_end = |doc: &str| doc.find("<title>").unwrap();
    assert_eq!(&dash[..head_end(&dash)], &orders_page[..head_end(&orders_page)]);
}
