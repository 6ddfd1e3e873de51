use std::time::Duration;

use rand::Rng;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay to wait before retry number `attempt` (zero-based).
    ///
    /// Jittered delays are clamped to the largest representable `Duration`.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = factor.powi(i32::try_from(attempt).unwrap_or(i32::MAX));
                let raw = base.as_secs_f64() * exp;
                let capped = raw.min(max.as_secs_f64()).max(0.0);
                let scaled = if *jitter {
                    capped * rand::rng().random_range(0.5_f64..1.5)
                } else {
                    capped
                };
                Duration::try_from_secs_f64(scaled).unwrap_or(Duration::MAX)
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl RetryConfig {
    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

/// Send `req`, retrying according to `cfg`.
///
/// Responses with a non-retryable status are returned as-is; callers still check the status.
pub(crate) async fn send_with_retry(
    req: reqwest::RequestBuilder,
    cfg: &RetryConfig,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut attempt: u32 = 0;
    loop {
        // Streaming bodies cannot be cloned; send those once.
        let Some(this_try) = req.try_clone() else {
            return req.send().await;
        };

        let can_retry = cfg.enabled && attempt < cfg.max_retries;
        match this_try.send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                if can_retry && cfg.retry_on_status.contains(&status) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(status, attempt, url = %resp.url(), "retrying after status");
                } else {
                    return Ok(resp);
                }
            }
            Err(e) => {
                let retryable = (cfg.retry_on_timeout && e.is_timeout())
                    || (cfg.retry_on_connect && e.is_connect());
                if !(can_retry && retryable) {
                    return Err(e);
                }
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, attempt, "retrying after transport error");
            }
        }

        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
        attempt += 1;
    }
}
