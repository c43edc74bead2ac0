//! Wire-value normalization: the service's string timestamps, its embedded
//! Hadoop-style XML configuration blobs, and loose JSON field access.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{OozieError, Result};

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Parse a service timestamp, e.g. `"Sat, 10 Jul 2010 01:00:00 GMT"`.
///
/// Callers only invoke this on present, non-empty fields; absent fields stay
/// absent rather than defaulting to a sentinel time.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| OozieError::MalformedTimestamp(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Configuration blobs
// ---------------------------------------------------------------------------

/// Parse an XML configuration document of
/// `<property><name>k</name><value>v</value></property>` entries into an
/// ordered map. Empty input yields an empty map without touching the parser.
pub fn parse_config(raw: &str) -> Result<IndexMap<String, String>> {
    let mut conf = IndexMap::new();
    if raw.trim().is_empty() {
        return Ok(conf);
    }

    let doc = roxmltree::Document::parse(raw)
        .map_err(|e| OozieError::MalformedConfig(e.to_string()))?;

    for property in doc.descendants().filter(|n| n.has_tag_name("property")) {
        let name = property
            .children()
            .find(|n| n.has_tag_name("name"))
            .and_then(|n| n.text());
        let value = property
            .children()
            .find(|n| n.has_tag_name("value"))
            .and_then(|n| n.text());
        if let Some(name) = name {
            conf.insert(
                name.trim().to_string(),
                value.map(|v| v.trim().to_string()).unwrap_or_default(),
            );
        }
    }
    Ok(conf)
}

// ---------------------------------------------------------------------------
// JSON field helpers
// ---------------------------------------------------------------------------

/// Read a field as a string. Numbers are stringified; null and absent keys
/// yield `None`.
pub(crate) fn opt_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a field as an integer, coercing numeric strings (`"3"` -> 3).
pub(crate) fn opt_i64(map: &Map<String, Value>, key: &str) -> Result<Option<i64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Some(i)),
            None => Err(OozieError::MalformedNumber {
                field: key.to_string(),
                value: n.to_string(),
            }),
        },
        Some(Value::String(s)) => {
            s.trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| OozieError::MalformedNumber {
                    field: key.to_string(),
                    value: s.clone(),
                })
        }
        Some(other) => Err(OozieError::MalformedNumber {
            field: key.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Read a field as a timestamp; absent or empty fields stay absent.
pub(crate) fn opt_timestamp(map: &Map<String, Value>, key: &str) -> Result<Option<DateTime<Utc>>> {
    match opt_str(map, key) {
        Some(raw) if !raw.is_empty() => parse_timestamp(&raw).map(Some),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn as_map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn timestamp_parses_gmt_format() {
        let ts = parse_timestamp("Sat, 10 Jul 2010 01:00:00 GMT").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2010, 7, 10, 1, 0, 0).unwrap());
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("2010-07-10 01:00:00"),
            Err(OozieError::MalformedTimestamp(_))
        ));
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn config_empty_input_is_empty_map() {
        assert!(parse_config("").unwrap().is_empty());
        assert!(parse_config("   \n ").unwrap().is_empty());
    }

    #[test]
    fn config_roundtrip() {
        let xml = "<configuration>\
                   <property><name>k</name><value>v</value></property>\
                   <property><name> spaced </name><value> v2 </value></property>\
                   </configuration>";
        let conf = parse_config(xml).unwrap();
        assert_eq!(conf.get("k").map(String::as_str), Some("v"));
        assert_eq!(conf.get("spaced").map(String::as_str), Some("v2"));
        assert_eq!(conf.len(), 2);
    }

    #[test]
    fn config_preserves_document_order() {
        let xml = "<configuration>\
                   <property><name>b</name><value>1</value></property>\
                   <property><name>a</name><value>2</value></property>\
                   </configuration>";
        let conf = parse_config(xml).unwrap();
        let keys: Vec<&str> = conf.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn config_value_may_be_empty() {
        let xml = "<configuration><property><name>k</name><value/></property></configuration>";
        let conf = parse_config(xml).unwrap();
        assert_eq!(conf.get("k").map(String::as_str), Some(""));
    }

    #[test]
    fn config_malformed_xml_errors() {
        assert!(matches!(
            parse_config("<configuration><property>"),
            Err(OozieError::MalformedConfig(_))
        ));
    }

    #[test]
    fn opt_str_stringifies_numbers() {
        let map = as_map(json!({"a": "x", "b": 7, "c": null}));
        assert_eq!(opt_str(&map, "a").as_deref(), Some("x"));
        assert_eq!(opt_str(&map, "b").as_deref(), Some("7"));
        assert_eq!(opt_str(&map, "c"), None);
        assert_eq!(opt_str(&map, "missing"), None);
    }

    #[test]
    fn opt_i64_coerces_numeric_strings() {
        let map = as_map(json!({"n": 3, "s": "3", "bad": "three"}));
        assert_eq!(opt_i64(&map, "n").unwrap(), Some(3));
        assert_eq!(opt_i64(&map, "s").unwrap(), Some(3));
        assert_eq!(opt_i64(&map, "missing").unwrap(), None);
        assert!(matches!(
            opt_i64(&map, "bad"),
            Err(OozieError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn opt_timestamp_absent_stays_absent() {
        let map = as_map(json!({"t": "Sat, 10 Jul 2010 01:00:00 GMT", "e": ""}));
        assert!(opt_timestamp(&map, "t").unwrap().is_some());
        assert_eq!(opt_timestamp(&map, "e").unwrap(), None);
        assert_eq!(opt_timestamp(&map, "missing").unwrap(), None);
    }
}
