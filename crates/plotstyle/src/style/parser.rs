//! YAML and JSON stylesheet parsing.
//!
//! A stylesheet is a flat mapping of attribute names to scalar values, or a
//! list of such mappings applied in order:
//!
//! ```yaml
//! # single layer
//! color: steelblue
//! lw: 0.5
//! ```
//!
//! ```yaml
//! # layered: later entries win
//! - facecolor: never
//!   edgecolor: black
//! - lw: 2
//! ```
//!
//! Scalars map onto [`StyleValue`]: `null` is `None`, booleans and numbers
//! keep their type, the string `never` is the sentinel and every other string
//! is text. Nested sequences and mappings are rejected.

use std::path::Path;

use super::dict::{StyleDict, StyleMap};
use super::error::{Result, StylesheetError};
use super::merge::{merge, Merged};
use super::value::StyleValue;

/// Recognized stylesheet file extensions.
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// An ordered stack of style dicts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    layers: Vec<StyleDict>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer on top of the existing ones.
    pub fn push(&mut self, layer: StyleDict) {
        self.layers.push(layer);
    }

    /// Appends every layer of `other`.
    pub fn extend(&mut self, other: Stylesheet) {
        self.layers.extend(other.layers);
    }

    pub fn layers(&self) -> &[StyleDict] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Merges all layers in order.
    pub fn merge(&self) -> Merged {
        merge(&self.layers)
    }

    /// Merges all layers, discarding diagnostics.
    pub fn to_style(&self) -> StyleMap {
        self.merge().into_style()
    }

    /// Parses a YAML document holding one mapping or a list of mappings.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        match root {
            serde_yaml::Value::Null => Ok(Stylesheet::new()),
            serde_yaml::Value::Mapping(map) => Ok(Stylesheet {
                layers: vec![parse_yaml_mapping(&map)?],
            }),
            serde_yaml::Value::Sequence(seq) => {
                let layers = seq
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        serde_yaml::Value::Mapping(map) => parse_yaml_mapping(map),
                        serde_yaml::Value::Null => Ok(StyleDict::new()),
                        other => Err(StylesheetError::InvalidStructure {
                            message: format!("layer {} is not a mapping: {:?}", index, other),
                            path: None,
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Stylesheet { layers })
            }
            other => Err(StylesheetError::InvalidStructure {
                message: format!("expected a mapping or a list of mappings, got {:?}", other),
                path: None,
            }),
        }
    }

    /// Parses a JSON document holding one object or an array of objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        match root {
            serde_json::Value::Object(map) => Ok(Stylesheet {
                layers: vec![parse_json_object(&map)?],
            }),
            serde_json::Value::Array(items) => {
                let layers = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        serde_json::Value::Object(map) => parse_json_object(map),
                        other => Err(StylesheetError::InvalidStructure {
                            message: format!("layer {} is not an object: {}", index, other),
                            path: None,
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Stylesheet { layers })
            }
            other => Err(StylesheetError::InvalidStructure {
                message: format!("expected an object or an array of objects, got {}", other),
                path: None,
            }),
        }
    }
}

impl From<StyleDict> for Stylesheet {
    fn from(layer: StyleDict) -> Self {
        Stylesheet {
            layers: vec![layer],
        }
    }
}

impl FromIterator<StyleDict> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = StyleDict>>(iter: I) -> Self {
        Stylesheet {
            layers: iter.into_iter().collect(),
        }
    }
}

impl StyleDict {
    /// Parses a single YAML mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        match value {
            serde_yaml::Value::Null => Ok(StyleDict::new()),
            serde_yaml::Value::Mapping(map) => parse_yaml_mapping(&map),
            other => Err(StylesheetError::InvalidStructure {
                message: format!("expected a mapping, got {:?}", other),
                path: None,
            }),
        }
    }

    /// Parses a single JSON object. Key order is preserved.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        match value {
            serde_json::Value::Object(map) => parse_json_object(&map),
            other => Err(StylesheetError::InvalidStructure {
                message: format!("expected an object, got {}", other),
                path: None,
            }),
        }
    }
}

/// Reads a stylesheet file, picking the format from its extension.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<Stylesheet> {
    let path = path.as_ref();
    let name = path.to_string_lossy();
    let is_json = name.ends_with(".json");
    if !STYLESHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return Err(StylesheetError::UnknownFormat {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = if is_json {
        Stylesheet::from_json(&content)
    } else {
        Stylesheet::from_yaml(&content)
    };
    let sheet = parsed.map_err(|e| e.with_path(path))?;
    tracing::debug!(path = %path.display(), layers = sheet.len(), "loaded stylesheet");
    Ok(sheet)
}

fn parse_yaml_mapping(map: &serde_yaml::Mapping) -> Result<StyleDict> {
    let mut dict = StyleDict::new();

    for (key, value) in map {
        let name = key.as_str().ok_or_else(|| StylesheetError::NonStringKey {
            key: format!("{:?}", key),
            path: None,
        })?;
        dict.set(name, yaml_scalar(name, value)?);
    }

    Ok(dict)
}

fn yaml_scalar(name: &str, value: &serde_yaml::Value) -> Result<StyleValue> {
    match value {
        serde_yaml::Value::Null => Ok(StyleValue::None),
        serde_yaml::Value::Bool(b) => Ok(StyleValue::Bool(*b)),
        serde_yaml::Value::Number(n) => n.as_f64().map(StyleValue::Number).ok_or_else(|| {
            StylesheetError::UnsupportedValue {
                key: name.to_string(),
                message: format!("number {} is not representable", n),
                path: None,
            }
        }),
        serde_yaml::Value::String(s) => Ok(StyleValue::from(s.as_str())),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err(StylesheetError::UnsupportedValue {
                key: name.to_string(),
                message: "expected a scalar, got a nested collection".to_string(),
                path: None,
            })
        }
        serde_yaml::Value::Tagged(tagged) => yaml_scalar(name, &tagged.value),
    }
}

fn parse_json_object(map: &serde_json::Map<String, serde_json::Value>) -> Result<StyleDict> {
    let mut dict = StyleDict::new();

    for (name, value) in map {
        let value = match value {
            serde_json::Value::Null => StyleValue::None,
            serde_json::Value::Bool(b) => StyleValue::Bool(*b),
            serde_json::Value::Number(n) => {
                StyleValue::Number(n.as_f64().ok_or_else(|| StylesheetError::UnsupportedValue {
                    key: name.clone(),
                    message: format!("number {} is not representable", n),
                    path: None,
                })?)
            }
            serde_json::Value::String(s) => StyleValue::from(s.as_str()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(StylesheetError::UnsupportedValue {
                    key: name.clone(),
                    message: "expected a scalar, got a nested collection".to_string(),
                    path: None,
                });
            }
        };
        dict.set(name.as_str(), value);
    }

    Ok(dict)
}
