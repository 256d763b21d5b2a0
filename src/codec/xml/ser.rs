//! Build an [`XmlElement`] tree from the serde data model.
//!
//! Values are first rendered with `serde_json::to_value`, so both encodings
//! see exactly the same keys; this module only maps the key scheme back to
//! attributes, text and namespaced children.

use serde_json::Value;

use super::dom::{XmlAttribute, XmlElement};
use crate::codec::namespace::{self, QualifiedName, TEXT_KEY};
use crate::error::{Error, Result};

/// Render `value` as an element called `name`.
pub fn to_element(name: QualifiedName, value: &Value) -> Result<XmlElement> {
    let mut element = XmlElement::new(name);
    match value {
        Value::Null => {}
        Value::Object(map) => {
            let parent = element.name.namespace.clone();
            for (key, field) in map {
                if let Some(attr) = key.strip_prefix('@') {
                    if let Some(text) = attribute_text(key, field)? {
                        element.attributes.push(XmlAttribute {
                            name: namespace::parse_attribute_key(attr)?,
                            value: text,
                        });
                    }
                } else if key == TEXT_KEY {
                    if let Some(text) = scalar_text(field) {
                        element.text = text;
                    } else if !field.is_null() {
                        return Err(Error::xml(format!(
                            "text of <{}> must be a scalar",
                            element.name
                        )));
                    }
                } else {
                    let child = namespace::parse_child_key(key, parent.as_deref())?;
                    push_children(&mut element, child, field)?;
                }
            }
        }
        Value::Array(_) => {
            return Err(Error::xml(format!(
                "<{}> cannot hold a nested list",
                element.name
            )));
        }
        scalar => element.text = scalar_text(scalar).unwrap_or_default(),
    }
    Ok(element)
}

fn push_children(parent: &mut XmlElement, name: QualifiedName, value: &Value) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for item in items.iter().filter(|item| !item.is_null()) {
                parent.children.push(to_element(name.clone(), item)?);
            }
            Ok(())
        }
        _ => {
            parent.children.push(to_element(name, value)?);
            Ok(())
        }
    }
}

/// Attribute text; lists become `xs:list` whitespace separated tokens.
fn attribute_text(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let tokens = items
                .iter()
                .map(|item| {
                    scalar_text(item)
                        .ok_or_else(|| Error::xml(format!("attribute `{key}` holds a non-scalar list item")))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(tokens.join(" ")))
        }
        Value::Object(_) => Err(Error::xml(format!("attribute `{key}` cannot hold an object"))),
        scalar => Ok(scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
