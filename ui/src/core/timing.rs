//! Wall-clock helpers and async delays.

use time::{macros::format_description, OffsetDateTime};

/// Current wall-clock time in unix milliseconds.
pub fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// `HH:MM:SS` (UTC) for an observation timestamp.
pub fn format_clock(timestamp_ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(timestamp_ms as i128 * 1_000_000)
        .ok()
        .and_then(|at| {
            at.format(&format_description!("[hour]:[minute]:[second]"))
                .ok()
        })
        .unwrap_or_else(|| "--:--:--".to_string())
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
