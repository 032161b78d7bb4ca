//! Build-time configuration for the API endpoint, log level and guard redirect
//! delay, with an optional runtime override. The runtime config is read from
//! `window.WCPMS_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Configuration values are public; do
//! not store secrets here.

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
/// Delay between a guard's notification and its redirect.
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 100;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub redirect_delay_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("WCPMS_API_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let log_level = option_env!("WCPMS_LOG_LEVEL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let redirect_delay_ms = option_env!("WCPMS_REDIRECT_DELAY_MS")
            .and_then(parse_delay)
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);

        let mut config = Self {
            api_base_url,
            log_level,
            redirect_delay_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
    redirect_delay_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.redirect_delay_ms {
        config.redirect_delay_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("WCPMS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
        redirect_delay_ms: read_runtime_value(&object, "redirect_delay_ms")
            .as_deref()
            .and_then(parse_delay),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_delay(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, parse_delay,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            redirect_delay_ms: 100,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.capnuocphutho.vn/api "),
            Some("https://api.capnuocphutho.vn/api".to_string())
        );
    }

    #[test]
    fn parse_delay_accepts_integers_only() {
        assert_eq!(parse_delay(" 250 "), Some(250));
        assert_eq!(parse_delay("0"), Some(0));
        assert_eq!(parse_delay("-5"), None);
        assert_eq!(parse_delay("soon"), None);
    }

    #[test]
    fn load_without_runtime_config_uses_defaults() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
            redirect_delay_ms: parse_delay("never"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.redirect_delay_ms, 100);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://portal.example/api"),
            log_level: normalize_runtime_value("debug"),
            redirect_delay_ms: parse_delay("400"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://portal.example/api");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.redirect_delay_ms, 400);
    }
}
