use axum::response::Html;

/// GET /
/// Serves the single-page interactive shell: upload control, URL field,
/// trigger button, spinner, and output region.
pub async fn shell_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
