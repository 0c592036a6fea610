use axum::response::Html;

use crate::CONFIG;

const TEMPLATE: &str = include_str!("page.html");

pub async fn index() -> Html<String> {
    Html(render_page(CONFIG.refresh_seconds))
}

pub(crate) fn render_page(refresh_seconds: u64) -> String {
    TEMPLATE
        .replace(
            "__REFRESH_MS__",
            &refresh_seconds.saturating_mul(1000).to_string(),
        )
        .replace("__REFRESH_SECONDS__", &refresh_seconds.to_string())
}
