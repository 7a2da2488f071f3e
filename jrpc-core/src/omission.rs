//! Field-omission rules applied before a message is written out
//!
//! Members that were never supplied are always left out of the wire text
//! (serde skips `None`). What else gets dropped depends on the policy:
//!
//! - [`OmissionPolicy::EmptyValues`] strips every "empty" value recursively:
//!   `null`, `false`, numeric zero, `""`, `"0"`, `[]`, `{}`, and containers
//!   that end up empty after their own members were stripped. Peers built
//!   against the older wire behaviour expect exactly this output, so it is
//!   the default.
//! - [`OmissionPolicy::AbsentOnly`] leaves supplied values alone. A result of
//!   `0`, an id of `0` or an explicit `null` id all reach the wire, as
//!   JSON-RPC 2.0 requires.
//!
//! # Examples
//!
//! ```rust
//! use jrpc_core::OmissionPolicy;
//! use serde_json::json;
//!
//! let mut value = json!({"jsonrpc": "2.0", "result": 0, "id": 1});
//! OmissionPolicy::EmptyValues.apply(&mut value);
//! assert_eq!(value, json!({"jsonrpc": "2.0", "id": 1}));
//! ```

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which values the encoder removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OmissionPolicy {
    /// Remove every empty or falsy value, recursively
    #[default]
    EmptyValues,
    /// Remove only members that were not supplied
    AbsentOnly,
}

impl OmissionPolicy {
    /// Apply the policy to an already serialized message, in place
    pub fn apply(self, value: &mut Value) {
        match self {
            OmissionPolicy::EmptyValues => remove_empty_fields(value),
            OmissionPolicy::AbsentOnly => {}
        }
    }
}

impl FromStr for OmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "empty-values" | "empty_values" => Ok(OmissionPolicy::EmptyValues),
            "absent" | "absent-only" | "absent_only" => Ok(OmissionPolicy::AbsentOnly),
            other => Err(format!("unknown omission policy '{}'", other)),
        }
    }
}

impl fmt::Display for OmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmissionPolicy::EmptyValues => f.write_str("empty"),
            OmissionPolicy::AbsentOnly => f.write_str("absent"),
        }
    }
}

/// Whether a value counts as empty under [`OmissionPolicy::EmptyValues`]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.is_empty(),
    }
}

// Depth-first: children are pruned before their parent is tested, so a
// container emptied by pruning is itself removed.
fn remove_empty_fields(value: &mut Value) {
    match value {
        Value::Object(members) => {
            for member in members.values_mut() {
                remove_empty_fields(member);
            }
            members.retain(|_, member| !is_empty_value(member));
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                remove_empty_fields(item);
            }
            items.retain(|item| !is_empty_value(item));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(is_empty_value(&value), "{} should be empty", value);
        }
        for value in [json!(true), json!(1), json!(-0.5), json!(" "), json!("00"), json!([0]), json!({"a": null})] {
            assert!(!is_empty_value(&value), "{} should not be empty", value);
        }
    }

    #[test]
    fn test_nested_containers_collapse() {
        let mut value = json!({
            "jsonrpc": "2.0",
            "method": "m",
            "params": {"a": {"b": [null, {}, ""]}, "keep": 1},
            "id": 3
        });
        OmissionPolicy::EmptyValues.apply(&mut value);
        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "method": "m", "params": {"keep": 1}, "id": 3})
        );
    }

    #[test]
    fn test_array_elements_removed_in_order() {
        let mut value = json!([1, 0, "x", false, [0], 2]);
        OmissionPolicy::EmptyValues.apply(&mut value);
        assert_eq!(value, json!([1, "x", 2]));
    }

    #[test]
    fn test_member_order_preserved() {
        let mut value = json!({"jsonrpc": "2.0", "result": 5, "error": null, "id": 1});
        OmissionPolicy::EmptyValues.apply(&mut value);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["jsonrpc", "result", "id"]);
    }

    #[test]
    fn test_absent_only_is_untouched() {
        let original = json!({"jsonrpc": "2.0", "result": 0, "id": null});
        let mut value = original.clone();
        OmissionPolicy::AbsentOnly.apply(&mut value);
        assert_eq!(value, original);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("empty".parse::<OmissionPolicy>(), Ok(OmissionPolicy::EmptyValues));
        assert_eq!(" Absent ".parse::<OmissionPolicy>(), Ok(OmissionPolicy::AbsentOnly));
        assert_eq!("absent_only".parse::<OmissionPolicy>(), Ok(OmissionPolicy::AbsentOnly));
        assert!("strict".parse::<OmissionPolicy>().is_err());
        assert_eq!(OmissionPolicy::AbsentOnly.to_string(), "absent");
    }
}
