/// Reply shape classification.
///
/// The game answers every command with a JSON value whose meaning depends on
/// which keys it carries. Classification order:
///
/// 1. **Scalar**: anything that is not an object (arrays included).
/// 2. **Error**: object with an `error` key, whatever else it holds.
/// 3. **Described**: object with an `options` key. An array of
///    `{attribute, type}` descriptors is an attribute list (optionally with
///    `values`); an object is an opaque array summary with an `elements` count.
/// 4. **Generic**: every other object.
use serde_json::Value;

/// Key marking an error reply.
pub const ERROR_KEY: &str = "error";
/// Key marking a described reply.
pub const OPTIONS_KEY: &str = "options";
/// Sibling of an attribute list holding the actual data.
pub const VALUES_KEY: &str = "values";
/// Element count inside an opaque array summary.
pub const ELEMENTS_KEY: &str = "elements";

/// Stand-in for a missing field.
static MISSING: Value = Value::Null;

/// Display metadata for one attribute of a described reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDescriptor<'a> {
    /// Attribute name, `null` when absent.
    pub attribute: &'a Value,
    /// Declared type, `null` when absent.
    pub kind: &'a Value,
}

impl<'a> AttributeDescriptor<'a> {
    fn from_value(value: &'a Value) -> Self {
        Self {
            attribute: value.get("attribute").unwrap_or(&MISSING),
            kind: value.get("type").unwrap_or(&MISSING),
        }
    }
}

/// A reply, borrowed from the decoded document and tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyShape<'a> {
    /// Not an object: printed as-is.
    Scalar(&'a Value),
    /// The `error` field of an error reply.
    Error(&'a Value),
    /// Attribute descriptors plus the optional `values` payload.
    AttributeList {
        attributes: Vec<AttributeDescriptor<'a>>,
        values: Option<&'a Value>,
    },
    /// Array summary; `elements` is `null` when the count is missing.
    OpaqueArray { elements: &'a Value },
    /// Any other object.
    Generic(&'a Value),
}

impl<'a> ReplyShape<'a> {
    /// Classify a decoded reply.
    #[must_use]
    pub fn classify(reply: &'a Value) -> Self {
        let Value::Object(map) = reply else {
            return Self::Scalar(reply);
        };

        if let Some(error) = map.get(ERROR_KEY) {
            return Self::Error(error);
        }

        match map.get(OPTIONS_KEY) {
            Some(Value::Array(descriptors)) => Self::AttributeList {
                attributes: descriptors
                    .iter()
                    .map(AttributeDescriptor::from_value)
                    .collect(),
                values: map.get(VALUES_KEY),
            },
            Some(Value::Object(summary)) => Self::OpaqueArray {
                elements: summary.get(ELEMENTS_KEY).unwrap_or(&MISSING),
            },
            // A scalar `options` carries no description to show.
            _ => Self::Generic(reply),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_objects_are_scalar() {
        for v in [json!(3), json!("hi"), json!(null), json!([1, 2])] {
            assert_eq!(ReplyShape::classify(&v), ReplyShape::Scalar(&v));
        }
    }

    #[test]
    fn test_error_beats_options() {
        let v = json!({"options": [], "error": "boom"});
        assert_eq!(ReplyShape::classify(&v), ReplyShape::Error(&json!("boom")));
    }

    #[test]
    fn test_attribute_list() {
        let v = json!({
            "options": [{"attribute": "x", "type": "int"}, {"attribute": "name"}],
            "values": {"x": 5}
        });
        let ReplyShape::AttributeList { attributes, values } = ReplyShape::classify(&v) else {
            panic!("expected attribute list");
        };
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].attribute, &json!("x"));
        assert_eq!(attributes[0].kind, &json!("int"));
        assert_eq!(attributes[1].kind, &Value::Null);
        assert_eq!(values, Some(&json!({"x": 5})));
    }

    #[test]
    fn test_attribute_list_without_values() {
        let v = json!({"options": []});
        assert!(matches!(
            ReplyShape::classify(&v),
            ReplyShape::AttributeList { values: None, .. }
        ));
    }

    #[test]
    fn test_opaque_array() {
        let v = json!({"options": {"elements": 7}});
        assert_eq!(
            ReplyShape::classify(&v),
            ReplyShape::OpaqueArray {
                elements: &json!(7)
            }
        );
    }

    #[test]
    fn test_scalar_options_and_plain_objects_are_generic() {
        let v = json!({"options": "weird"});
        assert_eq!(ReplyShape::classify(&v), ReplyShape::Generic(&v));
        let v = json!({"a": 1});
        assert_eq!(ReplyShape::classify(&v), ReplyShape::Generic(&v));
    }
}
