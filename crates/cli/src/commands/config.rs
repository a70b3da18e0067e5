use std::env;
use std::fs;
use std::path::Path;

use ongkir_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run(options: &LoadOptions) -> String {
    let config = match AppConfig::load(options.clone()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str], overridden: bool| {
        if overridden {
            return "override (command line)".to_string();
        }
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let lines = [
        "effective config (source precedence: override > env > file > default):".to_string(),
        render_line(
            "input.enforce_operating_range",
            &config.input.enforce_operating_range.to_string(),
            source(
                "input.enforce_operating_range",
                &["ONGKIR_INPUT_ENFORCE_OPERATING_RANGE"],
                options.overrides.enforce_operating_range.is_some(),
            ),
        ),
        render_line(
            "display.currency_symbol",
            &config.display.currency_symbol,
            source(
                "display.currency_symbol",
                &["ONGKIR_DISPLAY_CURRENCY_SYMBOL"],
                options.overrides.currency_symbol.is_some(),
            ),
        ),
        render_line(
            "logging.level",
            &config.logging.level,
            source(
                "logging.level",
                &["ONGKIR_LOGGING_LEVEL", "ONGKIR_LOG_LEVEL"],
                options.overrides.log_level.is_some(),
            ),
        ),
        render_line(
            "logging.format",
            &format!("{:?}", config.logging.format),
            source(
                "logging.format",
                &["ONGKIR_LOGGING_FORMAT", "ONGKIR_LOG_FORMAT"],
                options.overrides.log_format.is_some(),
            ),
        ),
    ];

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
