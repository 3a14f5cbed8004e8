//! 公開CSVの取得

use crate::error::{MinibusError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("minibus-finder/", env!("CARGO_PKG_VERSION"));

/// URLから本文を取得する（取得中はスピナーを表示）
pub async fn fetch_bytes(url: &str, timeout_seconds: u64) -> Result<Vec<u8>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("路線表を取得中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fetch(url, timeout_seconds).await;
    spinner.finish_and_clear();
    result
}

async fn fetch(url: &str, timeout_seconds: u64) -> Result<Vec<u8>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.max(1)))
        .user_agent(USER_AGENT)
        .build()?;

    debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MinibusError::FetchStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    debug!("{}バイト受信", body.len());
    Ok(body.to_vec())
}
