use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

use crate::config::MotionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Builds the JSON line for an event, or `None` when the level is filtered out.
pub fn build_log_line(
    config: &MotionConfig,
    level: LogLevel,
    event: &str,
    fields: Value,
    ts: u64,
) -> Option<Value> {
    if level < config.log_level {
        return None;
    }

    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload))
}

pub fn log_event(config: &MotionConfig, level: LogLevel, event: &str, fields: Value) {
    let Some(line) = build_log_line(config, level, event, fields, now_unix_millis()) else {
        return;
    };

    emit(level, &line);
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &Value) {
    let text = line.to_string();
    match level {
        LogLevel::Warn => gloo::console::warn!(text),
        LogLevel::Debug | LogLevel::Info => gloo::console::log!(text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &Value) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_below_threshold_are_dropped() {
        let config = MotionConfig::default();

        let line = build_log_line(&config, LogLevel::Debug, "modal_opened", json!({}), 1);
        assert!(line.is_none());
    }

    #[test]
    fn line_carries_base_keys_and_caller_fields() {
        let config = MotionConfig {
            log_level: LogLevel::Debug,
            ..MotionConfig::default()
        };

        let line = build_log_line(
            &config,
            LogLevel::Info,
            "contact_simulated",
            json!({ "label": "Send intro" }),
            42,
        )
        .expect("info passes a debug threshold");

        assert_eq!(line["ts"], json!(42));
        assert_eq!(line["level"], json!("info"));
        assert_eq!(line["event"], json!("contact_simulated"));
        assert_eq!(line["label"], json!("Send intro"));
    }

    #[test]
    fn warn_outranks_info() {
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
    }
}
