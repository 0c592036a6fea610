use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{Local, SecondsFormat};
use tokio::time::Instant;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, time},
    prelude::*,
};
use yansi::Paint;

use crate::CONFIG;

pub fn init() {
    let is_color = CONFIG.log.style.is_color();
    if !is_color {
        yansi::disable();
    }
    let format = fmt::layer().with_timer(LocalTime).with_ansi(is_color);
    let level = CONFIG.log.level.as_str();
    let filter: Targets = match level.parse() {
        Ok(f) => f,
        Err(e) => {
            let err = format!("string {} did not parse successfully: {}", level, e);
            panic!("{}", err.red().bold());
        }
    };

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .init();
}

pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let res = next.run(req).await;

    let status = res.status();
    let status = match status.as_u16() {
        100..=199 => status.blue(),
        200..=299 => status.green(),
        300..=399 => status.cyan(),
        400..=499 => status.yellow(),
        _ => status.red(),
    };
    info!(
        method = ?method.green(),
        path = ?path.blue(),
        status = ?status,
        elapsed = ?start.elapsed().rgb(248, 200, 220)
    );
    res
}

struct LocalTime;

impl time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
        )
    }
}
