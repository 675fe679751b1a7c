use axum::response::Html;

/// Tag for grouping index endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
