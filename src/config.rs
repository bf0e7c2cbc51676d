use crate::logging::LogLevel;

pub const DEFAULT_HEADER_THRESHOLD: f64 = 4.0;
pub const DEFAULT_HEADER_ACTIVATION: f64 = 80.0;
pub const DEFAULT_ANCHOR_PADDING: f64 = 8.0;
pub const DEFAULT_RIPPLE_MS: u32 = 300;
pub const DEFAULT_PARTICLE_COUNT: usize = 18;
pub const DEFAULT_MAX_TILT_DEG: f64 = 10.0;
pub const DEFAULT_MAX_SHIFT_PX: f64 = 14.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.18;
pub const DEFAULT_CONTACT_RESTORE_MS: u32 = 1_400;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const HEADER_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 64.0);
const HEADER_ACTIVATION_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const ANCHOR_PADDING_BOUNDS: (f64, f64) = (0.0, 200.0);
const RIPPLE_MS_BOUNDS: (u32, u32) = (50, 5_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 128);
const MAX_TILT_DEG_BOUNDS: (f64, f64) = (0.0, 45.0);
const MAX_SHIFT_PX_BOUNDS: (f64, f64) = (0.0, 64.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const CONTACT_RESTORE_MS_BOUNDS: (u32, u32) = (100, 10_000);

/// Tuning knobs for every behavior unit.
///
/// Values come from `data-*` attributes on the document root. Anything that
/// is missing, unparsable, or out of bounds keeps its default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub header_threshold: f64,
    pub header_activation: f64,
    pub anchor_padding: f64,
    pub ripple_ms: u32,
    pub particle_count: usize,
    pub max_tilt_deg: f64,
    pub max_shift_px: f64,
    pub reveal_threshold: f64,
    pub contact_restore_ms: u32,
    pub log_level: LogLevel,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            header_threshold: DEFAULT_HEADER_THRESHOLD,
            header_activation: DEFAULT_HEADER_ACTIVATION,
            anchor_padding: DEFAULT_ANCHOR_PADDING,
            ripple_ms: DEFAULT_RIPPLE_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            max_shift_px: DEFAULT_MAX_SHIFT_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            contact_restore_ms: DEFAULT_CONTACT_RESTORE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl MotionConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            header_threshold: parse_f64_with_bounds(
                &lookup,
                "data-header-threshold",
                DEFAULT_HEADER_THRESHOLD,
                HEADER_THRESHOLD_BOUNDS,
            ),
            header_activation: parse_f64_with_bounds(
                &lookup,
                "data-header-activation",
                DEFAULT_HEADER_ACTIVATION,
                HEADER_ACTIVATION_BOUNDS,
            ),
            anchor_padding: parse_f64_with_bounds(
                &lookup,
                "data-anchor-padding",
                DEFAULT_ANCHOR_PADDING,
                ANCHOR_PADDING_BOUNDS,
            ),
            ripple_ms: parse_u32_with_bounds(
                &lookup,
                "data-ripple-ms",
                DEFAULT_RIPPLE_MS,
                RIPPLE_MS_BOUNDS,
            ),
            particle_count: parse_usize_with_bounds(
                &lookup,
                "data-particle-count",
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            max_tilt_deg: parse_f64_with_bounds(
                &lookup,
                "data-max-tilt",
                DEFAULT_MAX_TILT_DEG,
                MAX_TILT_DEG_BOUNDS,
            ),
            max_shift_px: parse_f64_with_bounds(
                &lookup,
                "data-max-shift",
                DEFAULT_MAX_SHIFT_PX,
                MAX_SHIFT_PX_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "data-reveal-threshold",
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            contact_restore_ms: parse_u32_with_bounds(
                &lookup,
                "data-contact-restore-ms",
                DEFAULT_CONTACT_RESTORE_MS,
                CONTACT_RESTORE_MS_BOUNDS,
            ),
            log_level: parse_log_level(&lookup, "data-log-level", DEFAULT_LOG_LEVEL),
        }
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds<F>(lookup: &F, name: &str, default: usize, bounds: (usize, usize)) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> MotionConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        MotionConfig::from_lookup(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(config_from(&[]), MotionConfig::default());
    }

    #[test]
    fn in_bounds_values_override_defaults() {
        let config = config_from(&[
            ("data-header-threshold", " 6 "),
            ("data-particle-count", "24"),
            ("data-reveal-threshold", "0.5"),
            ("data-log-level", "DEBUG"),
        ]);

        assert_eq!(config.header_threshold, 6.0);
        assert_eq!(config.particle_count, 24);
        assert_eq!(config.reveal_threshold, 0.5);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = config_from(&[
            ("data-max-tilt", "90"),
            ("data-ripple-ms", "10"),
            ("data-contact-restore-ms", "soon"),
            ("data-reveal-threshold", "NaN"),
            ("data-log-level", "verbose"),
        ]);

        assert_eq!(config.max_tilt_deg, DEFAULT_MAX_TILT_DEG);
        assert_eq!(config.ripple_ms, DEFAULT_RIPPLE_MS);
        assert_eq!(config.contact_restore_ms, DEFAULT_CONTACT_RESTORE_MS);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
