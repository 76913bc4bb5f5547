use std::time::Duration;

use url::Url;

use crate::log::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_CONTACT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_SIMULATED_DELAY_MS: u64 = 1_500;
const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;
const DEFAULT_MOBILE_BREAKPOINT_PX: u64 = 768;
const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";

const CONTACT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const SIMULATED_DELAY_MS_BOUNDS: (u64, u64) = (0, 30_000);
const TOAST_DURATION_MS_BOUNDS: (u64, u64) = (1_000, 60_000);
const MOBILE_BREAKPOINT_PX_BOUNDS: (u64, u64) = (320, 2_048);

/// Baked in at compile time through `option_env!`; absent or invalid values
/// fall back to defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub log_level: LogLevel,
    pub contact_endpoint: Option<Url>,
    pub contact_timeout: Duration,
    pub simulated_delay: Duration,
    pub toast_duration: Duration,
    pub mobile_breakpoint: f64,
    pub service_worker_path: Option<String>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            contact_endpoint: None,
            contact_timeout: Duration::from_millis(DEFAULT_CONTACT_TIMEOUT_MS),
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT_PX as f64,
            service_worker_path: Some(DEFAULT_SERVICE_WORKER_PATH.to_string()),
        }
    }
}

impl EffectsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(compile_time_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let contact_timeout_ms = parse_u64_with_bounds(
            &lookup,
            "PORTFOLIO_CONTACT_TIMEOUT_MS",
            DEFAULT_CONTACT_TIMEOUT_MS,
            CONTACT_TIMEOUT_MS_BOUNDS,
        );
        let simulated_delay_ms = parse_u64_with_bounds(
            &lookup,
            "PORTFOLIO_SIMULATED_DELAY_MS",
            DEFAULT_SIMULATED_DELAY_MS,
            SIMULATED_DELAY_MS_BOUNDS,
        );
        let toast_duration_ms = parse_u64_with_bounds(
            &lookup,
            "PORTFOLIO_TOAST_DURATION_MS",
            DEFAULT_TOAST_DURATION_MS,
            TOAST_DURATION_MS_BOUNDS,
        );
        let mobile_breakpoint_px = parse_u64_with_bounds(
            &lookup,
            "PORTFOLIO_MOBILE_BREAKPOINT_PX",
            DEFAULT_MOBILE_BREAKPOINT_PX,
            MOBILE_BREAKPOINT_PX_BOUNDS,
        );
        let log_level = parse_non_empty_string(&lookup, "PORTFOLIO_LOG_LEVEL")
            .and_then(|value| LogLevel::from_name(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let contact_endpoint = parse_http_url(&lookup, "PORTFOLIO_CONTACT_ENDPOINT");
        let service_worker_path = match parse_non_empty_string(&lookup, "PORTFOLIO_SERVICE_WORKER_PATH") {
            Some(value) if value.eq_ignore_ascii_case("off") => None,
            Some(value) => Some(value),
            None => Some(DEFAULT_SERVICE_WORKER_PATH.to_string()),
        };

        Self {
            log_level,
            contact_endpoint,
            contact_timeout: Duration::from_millis(contact_timeout_ms),
            simulated_delay: Duration::from_millis(simulated_delay_ms),
            toast_duration: Duration::from_millis(toast_duration_ms),
            mobile_breakpoint: mobile_breakpoint_px as f64,
            service_worker_path,
        }
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}

fn compile_time_env(name: &str) -> Option<String> {
    let value = match name {
        "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
        "PORTFOLIO_CONTACT_ENDPOINT" => option_env!("PORTFOLIO_CONTACT_ENDPOINT"),
        "PORTFOLIO_CONTACT_TIMEOUT_MS" => option_env!("PORTFOLIO_CONTACT_TIMEOUT_MS"),
        "PORTFOLIO_SIMULATED_DELAY_MS" => option_env!("PORTFOLIO_SIMULATED_DELAY_MS"),
        "PORTFOLIO_TOAST_DURATION_MS" => option_env!("PORTFOLIO_TOAST_DURATION_MS"),
        "PORTFOLIO_MOBILE_BREAKPOINT_PX" => option_env!("PORTFOLIO_MOBILE_BREAKPOINT_PX"),
        "PORTFOLIO_SERVICE_WORKER_PATH" => option_env!("PORTFOLIO_SERVICE_WORKER_PATH"),
        _ => None,
    };

    value.map(ToString::to_string)
}

fn parse_u64_with_bounds<F>(lookup: &F, name: &str, default: u64, bounds: (u64, u64)) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url<F>(lookup: &F, name: &str) -> Option<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_non_empty_string(lookup, name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = EffectsConfig::from_lookup(|_| None);
        assert_eq!(config, EffectsConfig::default());
        assert_eq!(config.service_worker_path.as_deref(), Some("/sw.js"));
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = EffectsConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_CONTACT_TIMEOUT_MS", "5"),
            ("PORTFOLIO_TOAST_DURATION_MS", "not-a-number"),
            ("PORTFOLIO_MOBILE_BREAKPOINT_PX", "1024"),
        ]));

        assert_eq!(config.contact_timeout, Duration::from_millis(DEFAULT_CONTACT_TIMEOUT_MS));
        assert_eq!(config.toast_duration, Duration::from_millis(DEFAULT_TOAST_DURATION_MS));
        assert_eq!(config.mobile_breakpoint, 1024.0);
    }

    #[test]
    fn contact_endpoint_requires_http_scheme() {
        let https = EffectsConfig::from_lookup(lookup_from(&[(
            "PORTFOLIO_CONTACT_ENDPOINT",
            "https://api.example.com/contact",
        )]));
        assert_eq!(
            https.contact_endpoint.as_ref().map(Url::as_str),
            Some("https://api.example.com/contact")
        );

        let ftp = EffectsConfig::from_lookup(lookup_from(&[(
            "PORTFOLIO_CONTACT_ENDPOINT",
            "ftp://example.com/contact",
        )]));
        assert!(ftp.contact_endpoint.is_none());
    }

    #[test]
    fn service_worker_can_be_switched_off() {
        let config = EffectsConfig::from_lookup(lookup_from(&[("PORTFOLIO_SERVICE_WORKER_PATH", "OFF")]));
        assert!(config.service_worker_path.is_none());
    }

    #[test]
    fn mobile_width_is_inclusive() {
        let config = EffectsConfig::default();
        assert!(config.is_mobile_width(768.0));
        assert!(!config.is_mobile_width(769.0));
    }
}
