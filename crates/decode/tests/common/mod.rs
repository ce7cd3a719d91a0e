//! Mock decodable types and fixture loading shared by the integration tests.

#![allow(dead_code)]

use jsonkey_decode::{
    json_raw_representable, DecodingError, JsonDecodable, JsonKeyAccess, JsonObject,
    RawRepresentable,
};
use std::path::{Path, PathBuf};

/// Fixture document names under `tests/fixtures/`.
pub mod fixture {
    pub const CORRECT: &str = "correct";
    pub const EMPTY: &str = "empty";
    pub const CORRECT_WITHOUT_NESTED: &str = "correct_without_nested_object";
    pub const CORRECT_WITHOUT_NESTED_ARRAY: &str = "correct_with_missing_nested_array";
    pub const CORRECT_WITHOUT_RAW_ARRAY: &str = "correct_with_missing_raw_array";
    pub const MISSING: &str = "missing";
    pub const INVALID: &str = "invalid";
    pub const ROOT_ARRAY: &str = "root_array";
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a fixture document as an untyped value.
pub fn load_value(name: &str) -> serde_json::Value {
    let path = fixture_dir().join(format!("{}.json", name));
    let src = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&src).unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {}", name, e))
}

/// Load a fixture document whose root must be an object.
pub fn load_object(name: &str) -> JsonObject {
    match load_value(name) {
        serde_json::Value::Object(map) => map,
        other => panic!("fixture {} root is not an object: {}", name, other),
    }
}

/// Turn an inline `json!` object into a [`JsonObject`].
pub fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEnum {
    One,
    Two,
}

impl RawRepresentable for MockEnum {
    type Raw = String;

    fn from_raw(raw: &String) -> Option<Self> {
        match raw.as_str() {
            "one" => Some(MockEnum::One),
            "two" => Some(MockEnum::Two),
            _ => None,
        }
    }

    fn raw_value(&self) -> String {
        match self {
            MockEnum::One => "one".to_string(),
            MockEnum::Two => "two".to_string(),
        }
    }
}

json_raw_representable!(MockEnum);

#[derive(Debug, Clone, PartialEq)]
pub struct MockChild {
    pub name: String,
    pub age: Option<u32>,
}

impl JsonDecodable for MockChild {
    fn from_json_object(object: &JsonObject) -> Result<Self, DecodingError> {
        Ok(MockChild {
            name: object.decode_required("name")?,
            age: object.decode_optional("age"),
        })
    }
}

/// A parent whose only field is a permissive array of children.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSimpleParent {
    pub children: Vec<MockChild>,
}

impl JsonDecodable for MockSimpleParent {
    fn from_json_object(object: &JsonObject) -> Result<Self, DecodingError> {
        Ok(MockSimpleParent {
            children: object.decode_required("children")?,
        })
    }
}

/// A parent exercising every decodable shape, mandatory and optional.
#[derive(Debug, Clone, PartialEq)]
pub struct MockParent {
    pub mandatory_string: String,
    pub mandatory_int: i64,
    pub mandatory_double: f64,
    pub mandatory_bool: bool,
    pub mandatory_dictionary: JsonObject,
    pub mandatory_child: MockChild,
    pub mandatory_enum: MockEnum,
    pub mandatory_strings: Vec<String>,
    pub mandatory_ints: Vec<i64>,
    pub mandatory_dictionaries: Vec<JsonObject>,
    pub mandatory_children: Vec<MockChild>,
    pub mandatory_enums: Vec<MockEnum>,

    pub optional_string: Option<String>,
    pub optional_int: Option<i64>,
    pub optional_child: Option<MockChild>,
    pub optional_enum: Option<MockEnum>,
    pub optional_strings: Option<Vec<String>>,
    pub optional_children: Option<Vec<MockChild>>,
}

impl JsonDecodable for MockParent {
    fn from_json_object(object: &JsonObject) -> Result<Self, DecodingError> {
        Ok(MockParent {
            mandatory_string: object.decode_required("mandatory_string")?,
            mandatory_int: object.decode_required("mandatory_int")?,
            mandatory_double: object.decode_required("mandatory_double")?,
            mandatory_bool: object.decode_required("mandatory_bool")?,
            mandatory_dictionary: object.decode_required("mandatory_dictionary")?,
            mandatory_child: object.decode_required("mandatory_child")?,
            mandatory_enum: object.decode_required("mandatory_enum")?,
            mandatory_strings: object.decode_required("mandatory_strings")?,
            mandatory_ints: object.decode_required("mandatory_ints")?,
            mandatory_dictionaries: object.decode_required("mandatory_dictionaries")?,
            mandatory_children: object.decode_required("mandatory_children")?,
            mandatory_enums: object.decode_required("mandatory_enums")?,

            optional_string: object.decode_optional("optional_string"),
            optional_int: object.decode_optional("optional_int"),
            optional_child: object.decode_optional("optional_child"),
            optional_enum: object.decode_optional("optional_enum"),
            optional_strings: object.decode_optional("optional_strings"),
            optional_children: object.decode_optional("optional_children"),
        })
    }
}
