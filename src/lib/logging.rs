//! Browser logging setup. `tracing` events are forwarded to the developer
//! console through `tracing-wasm`, and panics are reported there as well.
//! Never log tokens, passwords or full session payloads.

use std::str::FromStr;
use tracing::Level;

/// Parses a level name, falling back to `INFO` for unknown values.
pub fn parse_level(value: &str) -> Level {
    Level::from_str(value.trim()).unwrap_or(Level::INFO)
}

/// Installs the panic hook and the console subscriber. Safe to call once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(parse_level(level))
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_case_insensitive_names() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("trace"), Level::TRACE);
    }

    #[test]
    fn parse_level_defaults_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
