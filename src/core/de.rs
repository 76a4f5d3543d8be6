//! Deserializers for CloudFormation custom-resource properties.
//!
//! CloudFormation stringifies every scalar it hands to a custom resource, so a
//! template value of `30` arrives as `"30"` and `true` arrives as `"true"`.
//! Direct Lambda invocations (and tests) send native JSON values instead.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => i32::try_from(n).map(Some).map_err(D::Error::custom),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("invalid boolean {s:?}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_i32")]
        n: Option<i32>,
        #[serde(default, deserialize_with = "opt_bool")]
        b: Option<bool>,
    }

    #[test]
    fn accepts_native_and_stringified_scalars() {
        let native: Probe = serde_json::from_value(json!({"n": 30, "b": true})).unwrap();
        assert_eq!(native.n, Some(30));
        assert_eq!(native.b, Some(true));

        let stringified: Probe =
            serde_json::from_value(json!({"n": " 128 ", "b": "False"})).unwrap();
        assert_eq!(stringified.n, Some(128));
        assert_eq!(stringified.b, Some(false));
    }

    #[test]
    fn missing_null_and_empty_are_none() {
        let missing: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.n, None);
        assert_eq!(missing.b, None);

        let nulls: Probe = serde_json::from_value(json!({"n": null, "b": null})).unwrap();
        assert_eq!(nulls.n, None);

        let empty: Probe = serde_json::from_value(json!({"n": "", "b": ""})).unwrap();
        assert_eq!(empty.n, None);
        assert_eq!(empty.b, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_value::<Probe>(json!({"n": "thirty"})).is_err());
        assert!(serde_json::from_value::<Probe>(json!({"n": 4_294_967_296_i64})).is_err());
        assert!(serde_json::from_value::<Probe>(json!({"b": "yes"})).is_err());
    }
}
