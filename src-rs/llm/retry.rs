use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Two retries on top of the initial attempt, i.e. at most three calls.
pub const DEFAULT_MAX_RETRIES: usize = 2;

const RATE_LIMIT_DELAY_SECS: u64 = 3;
const SERVER_ERROR_DELAY_SECS: u64 = 2;
const NETWORK_DELAY_SECS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transience {
    Transient { delay_secs: u64 },
    Fatal,
}

lazy_static! {
    static ref SERVER_ERROR: Regex = Regex::new(r"\b(50[0-9]|502|503|504)\b").unwrap();
}

fn is_network_failure(message: &str) -> bool {
    message.contains("failed to send request")
        || message.contains("error sending request")
        || message.contains("timed out")
        || message.contains("connection")
}

/// Decides whether an error is worth another attempt, from the error text
/// alone. Rate limits get the longest delay, server errors a moderate one,
/// transport failures the default. Everything else (auth failures,
/// validation, malformed responses) surfaces immediately.
pub fn classify(error: &anyhow::Error) -> Transience {
    let message = format!("{:#}", error).to_lowercase();

    let mut delay: Option<u64> = None;
    if message.contains("429") || message.contains("rate limit") {
        delay = Some(RATE_LIMIT_DELAY_SECS);
    }
    if SERVER_ERROR.is_match(&message) {
        delay = Some(SERVER_ERROR_DELAY_SECS);
    }
    if delay.is_none() && is_network_failure(&message) {
        delay = Some(NETWORK_DELAY_SECS);
    }

    match delay {
        Some(delay_secs) => Transience::Transient { delay_secs },
        None => Transience::Fatal,
    }
}

/// Runs a provider call with bounded retry. Fatal errors return on the
/// spot; transient ones are retried after their classified delay until
/// `max_retries` extra attempts are spent, then the last error surfaces.
pub async fn call_with_retry<F, Fut>(call: F, max_retries: usize) -> Result<String>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    for attempt in 0..=max_retries {
        match call().await {
            Ok(response) => return Ok(response),
            Err(e) => match classify(&e) {
                Transience::Transient { delay_secs } if attempt < max_retries => {
                    log::warn!(
                        "Provider call failed (attempt {}/{}), retrying in {}s: {:#}",
                        attempt + 1,
                        max_retries + 1,
                        delay_secs,
                        e
                    );
                    sleep(Duration::from_secs(delay_secs)).await;
                }
                _ => return Err(e),
            },
        }
    }
    unreachable!("loop returns on success or final failure")
}
