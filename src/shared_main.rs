use std::env;

use log::LevelFilter;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Info logging by default, debug output for `module` and this crate when
/// `RUST_LOG=debug` is set.
pub fn logger_init(module: &str) {
    let level = if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
        == "debug"
    {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("kassel_mensa_rs", level)
        .filter_module(module, level)
        .init();
}

/// Pretty JSON indented with tabs.
pub fn to_json_string<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::menu_data_types::{MealItem, PriceItem};

    #[test]
    fn json_uses_tabs_and_camel_case() {
        let meal = MealItem {
            name: "Suppe".to_string(),
            attributes: vec!["V".to_string()],
            price: Some(PriceItem {
                student: 1.0,
                employee: 2.0,
                visitor: 3.5,
            }),
            vital_info: None,
        };
        let json = to_json_string(&meal).unwrap();
        assert!(json.starts_with("{\n\t\"name\": \"Suppe\""));
        assert!(json.contains("\"vitalInfo\": null"));
        assert!(json.contains("\t\t\"visitor\": 3.5"));
    }
}
