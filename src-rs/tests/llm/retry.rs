use crate::llm::retry::{call_with_retry, classify, Transience, DEFAULT_MAX_RETRIES};

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn rate_limits_wait_the_longest() {
        let err = anyhow!("OpenAI API error: API request failed with status code: 429");
        assert_eq!(classify(&err), Transience::Transient { delay_secs: 3 });

        let worded = anyhow!("Anthropic API error: Rate Limit exceeded, slow down");
        assert_eq!(classify(&worded), Transience::Transient { delay_secs: 3 });
    }

    #[test]
    fn server_errors_wait_two_seconds() {
        for status in ["500", "502", "503", "504", "509"] {
            let err = anyhow!("API request failed with status code: {status}");
            assert_eq!(
                classify(&err),
                Transience::Transient { delay_secs: 2 },
                "status {status}"
            );
        }
    }

    #[test]
    fn server_error_match_needs_a_standalone_number() {
        // 5xx digits embedded in a longer number are not a server error.
        let err = anyhow!("request id 15031 rejected");
        assert_eq!(classify(&err), Transience::Fatal);
    }

    #[test]
    fn transport_failures_wait_one_second() {
        let err = anyhow!("Failed to send request to Gemini API: connection refused");
        assert_eq!(classify(&err), Transience::Transient { delay_secs: 1 });

        let timeout = anyhow!("error sending request: operation timed out");
        assert_eq!(classify(&timeout), Transience::Transient { delay_secs: 1 });
    }

    #[test]
    fn auth_and_shape_errors_are_fatal() {
        assert_eq!(
            classify(&anyhow!("API request failed with status code: 401")),
            Transience::Fatal
        );
        assert_eq!(
            classify(&anyhow!("Invalid response structure from OpenAI API")),
            Transience::Fatal
        );
        assert_eq!(
            classify(&anyhow!("Empty response from Claude API")),
            Transience::Fatal
        );
    }

    #[test]
    fn classification_reads_the_cause_chain() {
        let err = anyhow!("connection reset by peer").context("Failed to send request to xAI API");
        assert_eq!(classify(&err), Transience::Transient { delay_secs: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_retry_until_the_budget_runs_out() {
        let attempts = AtomicUsize::new(0);
        let result = call_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(anyhow!("API request failed with status code: 503")) }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn fatal_errors_never_retry() {
        let attempts = AtomicUsize::new(0);
        let result = call_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(anyhow!("API request failed with status code: 401")) }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn a_later_success_stops_the_retries() {
        let attempts = AtomicUsize::new(0);
        let result = call_with_retry(
            || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 1 {
                        Err(anyhow!("API request failed with status code: 429"))
                    } else {
                        Ok("Title: A | Desc: B".to_string())
                    }
                }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await;

        assert_eq!(result.unwrap(), "Title: A | Desc: B");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn an_immediate_success_makes_exactly_one_call() {
        let attempts = AtomicUsize::new(0);
        let result = call_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Ok("ok".to_string()) }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_sleeps_match_the_classified_delay() {
        let start = tokio::time::Instant::now();
        let _ = call_with_retry(
            || async { Err::<String, _>(anyhow!("rate limit exceeded")) },
            1,
        )
        .await;
        // One retry after the 3s rate-limit delay.
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
}
