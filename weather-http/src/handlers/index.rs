use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
