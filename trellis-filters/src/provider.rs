//! Example provider traits

use crate::error::ExampleResult;
use crate::media::WireFormat;
use crate::serializer::{self, SerializerOptions};
use serde::Serialize;
use serde_json::Value;

/// A capability that produces one example value of its output type.
///
/// Implementations are registered with an
/// [`ExamplesRegistry`](crate::registry::ExamplesRegistry) and resolved by
/// the declared request/response type during document generation. A fresh
/// example is produced on every call; providers hold no state.
///
/// ```
/// use serde::Serialize;
/// use trellis_filters::ExamplesProvider;
///
/// #[derive(Serialize)]
/// struct Greeting {
///     message: String,
/// }
///
/// struct GreetingExample;
///
/// impl ExamplesProvider for GreetingExample {
///     type Output = Greeting;
///
///     fn example(&self) -> Greeting {
///         Greeting {
///             message: "hello".to_string(),
///         }
///     }
/// }
/// ```
pub trait ExamplesProvider: Send + Sync + 'static {
    /// The payload type this provider produces examples for.
    type Output: Serialize + 'static;

    /// Produce one example value.
    fn example(&self) -> Self::Output;
}

/// Object-safe form of [`ExamplesProvider`] stored in the registry.
///
/// Rendering produces the document representation directly: a structured
/// JSON value for [`WireFormat::Json`], or the markup wrapped in a JSON
/// string for [`WireFormat::Xml`].
pub trait ErasedExamplesProvider: Send + Sync {
    /// Produce a fresh example and render it in the given wire format.
    fn render(&self, format: WireFormat, options: &SerializerOptions) -> ExampleResult<Value>;

    /// Name of the payload type, for logging and error attribution.
    fn output_type_name(&self) -> &'static str;
}

impl<P> ErasedExamplesProvider for P
where
    P: ExamplesProvider,
{
    fn render(&self, format: WireFormat, options: &SerializerOptions) -> ExampleResult<Value> {
        let value = self.example();
        match format {
            WireFormat::Json => serializer::to_json_value(&value, options),
            WireFormat::Xml => serializer::to_xml_string(&value, options).map(Value::String),
        }
    }

    fn output_type_name(&self) -> &'static str {
        std::any::type_name::<P::Output>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Widget {
        name: String,
    }

    struct WidgetExample;

    impl ExamplesProvider for WidgetExample {
        type Output = Widget;

        fn example(&self) -> Widget {
            Widget {
                name: "gear".to_string(),
            }
        }
    }

    #[test]
    fn test_erased_render_json() {
        let provider: &dyn ErasedExamplesProvider = &WidgetExample;
        let value = provider
            .render(WireFormat::Json, &SerializerOptions::default())
            .unwrap();

        assert_eq!(value, json!({"name": "gear"}));
    }

    #[test]
    fn test_erased_render_xml_wraps_markup_in_string() {
        let provider: &dyn ErasedExamplesProvider = &WidgetExample;
        let value = provider
            .render(WireFormat::Xml, &SerializerOptions::default())
            .unwrap();

        let Value::String(markup) = value else {
            panic!("XML render should produce a string value");
        };
        assert_eq!(markup, "<Widget><name>gear</name></Widget>");
    }

    #[test]
    fn test_output_type_name() {
        let provider: &dyn ErasedExamplesProvider = &WidgetExample;
        assert!(provider.output_type_name().contains("Widget"));
    }
}
