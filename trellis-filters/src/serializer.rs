//! Example serialization and its configuration

use crate::error::{ExampleError, ExampleResult};
use crate::media::WireFormat;
use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// JSON key-naming strategy applied to serialized example objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// Keep the serde-produced key names untouched.
    #[default]
    Preserve,
    /// `lowerCamelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
}

impl KeyStyle {
    fn apply(self, key: &str) -> String {
        match self {
            KeyStyle::Preserve => key.to_string(),
            KeyStyle::Camel => key.to_lower_camel_case(),
            KeyStyle::Pascal => key.to_pascal_case(),
            KeyStyle::Snake => key.to_snake_case(),
        }
    }
}

/// A custom value converter applied to the serialized JSON example.
pub type ValueTransform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Serialization options for rendered examples.
///
/// Immutable once built. The key style and transform shape the JSON
/// rendering only; XML output is the direct markup of the typed value.
#[derive(Clone, Default)]
pub struct SerializerOptions {
    key_style: KeyStyle,
    transform: Option<ValueTransform>,
}

impl SerializerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON key-naming strategy.
    pub fn with_key_style(mut self, style: KeyStyle) -> Self {
        self.key_style = style;
        self
    }

    /// Set a custom converter applied to the serialized JSON value.
    pub fn with_transform(
        mut self,
        transform: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }
}

impl fmt::Debug for SerializerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerOptions")
            .field("key_style", &self.key_style)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Serialize an example value to a JSON value, honoring the options.
pub fn to_json_value<T>(value: &T, options: &SerializerOptions) -> ExampleResult<Value>
where
    T: Serialize + ?Sized,
{
    let serialized = serde_json::to_value(value)
        .map_err(|e| ExampleError::serialization::<T>(WireFormat::Json, e))?;

    let styled = match options.key_style {
        KeyStyle::Preserve => serialized,
        style => rename_keys(serialized, style),
    };

    Ok(match &options.transform {
        Some(transform) => transform(styled),
        None => styled,
    })
}

/// Serialize an example value to XML markup.
///
/// The root element is named after the value's type; field names follow the
/// serde names of the type. Naming overrides are a JSON concern and do not
/// apply here.
pub fn to_xml_string<T>(value: &T, _options: &SerializerOptions) -> ExampleResult<String>
where
    T: Serialize + ?Sized,
{
    quick_xml::se::to_string(value).map_err(|e| ExampleError::serialization::<T>(WireFormat::Xml, e))
}

fn rename_keys(value: Value, style: KeyStyle) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (style.apply(&key), rename_keys(inner, style)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| rename_keys(v, style)).collect())
        }
        other => other,
    }
}
