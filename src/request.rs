//! Barcode request parameters and their defaults.
//!
//! Hosting boundaries usually hand over query parameters as strings, so numbers
//! and the `displayValue` flag deserialize from either native JSON values or strings.

use crate::helper::{self, GeneratedBarcode};
use serde::{de, Deserialize, Deserializer};

pub const DEFAULT_FORMAT: &str = "CODE128";
pub const DEFAULT_BAR_WIDTH: u32 = 2;
pub const DEFAULT_HEIGHT: u32 = 100;

/// Everything needed to render one barcode. Built fresh for every call.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodingRequest {
    pub value: String,
    pub format: String,
    #[serde(rename = "width", deserialize_with = "deserialize_u32")]
    pub bar_width: u32,
    #[serde(deserialize_with = "deserialize_u32")]
    pub height: u32,
    #[serde(deserialize_with = "deserialize_display_value")]
    pub display_value: bool,
}

impl Default for EncodingRequest {
    fn default() -> Self {
        Self {
            value: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
            height: DEFAULT_HEIGHT,
            display_value: true,
        }
    }
}

impl EncodingRequest {
    /// A request for `value` with every other parameter at its default.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Runs the full encode, layout and render pipeline.
    pub fn generate(&self) -> GeneratedBarcode {
        helper::generate(&self.value, &self.format, self.bar_width, self.height, self.display_value)
    }
}

/// Interprets a `displayValue` parameter: only the literal `"false"` hides the label.
pub fn parse_display_value(raw: &str) -> bool {
    raw != "false"
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOrString {
    Flag(bool),
    Text(String),
}

fn deserialize_display_value<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<bool, D::Error> {
    Ok(match FlagOrString::deserialize(deserializer)? {
        FlagOrString::Flag(flag) => flag,
        FlagOrString::Text(text) => parse_display_value(&text),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

fn deserialize_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| {
                de::Error::custom(format!("expected a non-negative integer, got {:?}", text))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = EncodingRequest::new("123");
        assert_eq!(request.value, "123");
        assert_eq!(request.format, "CODE128");
        assert_eq!(request.bar_width, 2);
        assert_eq!(request.height, 100);
        assert!(request.display_value);
    }

    #[test]
    fn test_parse_display_value() {
        assert!(!parse_display_value("false"));
        assert!(parse_display_value("true"));
        assert!(parse_display_value("FALSE"));
        assert!(parse_display_value("0"));
        assert!(parse_display_value(""));
    }

    #[test]
    fn test_deserialize_query_strings() {
        let request: EncodingRequest = serde_json::from_str(
            r#"{"value":"HELLO","format":"CODE39","width":"3","height":"80",
                "displayValue":"false"}"#,
        )
        .unwrap();
        assert_eq!(request.value, "HELLO");
        assert_eq!(request.format, "CODE39");
        assert_eq!(request.bar_width, 3);
        assert_eq!(request.height, 80);
        assert!(!request.display_value);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let request: EncodingRequest =
            serde_json::from_str(r#"{"value":"42","displayValue":"no"}"#).unwrap();
        assert_eq!(request, EncodingRequest::new("42"));

        let request: EncodingRequest =
            serde_json::from_str(r#"{"value":"42","height":60,"displayValue":false}"#).unwrap();
        assert_eq!(request.height, 60);
        assert!(!request.display_value);
    }

    #[test]
    fn test_deserialize_rejects_bad_numbers() {
        let parsed = serde_json::from_str::<EncodingRequest>(r#"{"value":"1","height":"tall"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_generate() {
        let response = EncodingRequest::new("123456789").generate();
        assert!(response.is_success());
        assert!(response.document.contains(">123456789</text>"));
    }
}
