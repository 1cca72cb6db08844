//! Request example setter

use crate::error::ExampleResult;
use crate::media;
use crate::provider::ErasedExamplesProvider;
use crate::serializer::SerializerOptions;
use tracing::trace;
use trellis_openapi::RequestBody;

/// Attach an example to a request body.
///
/// Same contract as the response setter, minus the status-code dimension:
/// no source means no side effects, and every recognized media-type entry
/// is overwritten with the rendered example. `None` options means the
/// defaults.
pub fn set_request_example(
    body: &mut RequestBody,
    source: Option<&dyn ErasedExamplesProvider>,
    options: Option<&SerializerOptions>,
) -> ExampleResult<()> {
    let Some(source) = source else {
        return Ok(());
    };

    trace!(
        example_type = source.output_type_name(),
        "attaching request example"
    );
    let defaults = SerializerOptions::default();
    media::write_examples(&mut body.content, source, options.unwrap_or(&defaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ExamplesProvider;
    use serde::Serialize;
    use serde_json::json;
    use trellis_openapi::MediaType;

    #[derive(Serialize)]
    struct Order {
        quantity: u32,
    }

    struct OrderExample;

    impl ExamplesProvider for OrderExample {
        type Output = Order;

        fn example(&self) -> Order {
            Order { quantity: 3 }
        }
    }

    fn json_body() -> RequestBody {
        RequestBody::new().with_media_type("application/json", MediaType::new())
    }

    #[test]
    fn test_sets_example_on_json_body() {
        let mut body = json_body();

        set_request_example(&mut body, Some(&OrderExample), None).unwrap();

        assert_eq!(
            body.content["application/json"].example,
            Some(json!({"quantity": 3}))
        );
    }

    #[test]
    fn test_none_source_leaves_body_untouched() {
        let mut body = json_body();

        set_request_example(&mut body, None, None).unwrap();

        assert!(body.content["application/json"].example.is_none());
    }

    #[test]
    fn test_empty_content_is_a_no_op() {
        let mut body = RequestBody::new();

        set_request_example(&mut body, Some(&OrderExample), None).unwrap();

        assert!(body.content.is_empty());
    }

    #[test]
    fn test_map_shaped_payload() {
        use std::collections::HashMap;

        struct SettingsExample;

        impl ExamplesProvider for SettingsExample {
            type Output = HashMap<String, serde_json::Value>;

            fn example(&self) -> Self::Output {
                let mut map = HashMap::new();
                map.insert("PropertyInt".to_string(), json!(1));
                map.insert("PropertyString".to_string(), json!("Some string"));
                map
            }
        }

        let mut body = json_body();

        set_request_example(&mut body, Some(&SettingsExample), None).unwrap();

        let example = body.content["application/json"].example.as_ref().unwrap();
        assert_eq!(example["PropertyInt"], 1);
        assert_eq!(example["PropertyString"], "Some string");
    }
}
