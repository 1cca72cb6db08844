//! Response example setter

use crate::error::ExampleResult;
use crate::media;
use crate::provider::ErasedExamplesProvider;
use crate::serializer::SerializerOptions;
use tracing::trace;
use trellis_openapi::Operation;

/// Attach an example to the response documented for `status`.
///
/// With no source, no matching response entry, or no response content, this
/// returns without side effects: examples target status codes that an
/// operation may simply not document, and that must never fail document
/// generation. When a response matches, every recognized media-type entry
/// is overwritten with the rendered example. `None` options means the
/// defaults.
pub fn set_response_example(
    operation: &mut Operation,
    status: u16,
    source: Option<&dyn ErasedExamplesProvider>,
    options: Option<&SerializerOptions>,
) -> ExampleResult<()> {
    let Some(source) = source else {
        return Ok(());
    };

    let Some(response) = operation.responses.get_mut(status.to_string().as_str()) else {
        trace!(status, "operation documents no response for status, skipping example");
        return Ok(());
    };
    let Some(content) = response.content.as_mut() else {
        return Ok(());
    };

    trace!(
        status,
        example_type = source.output_type_name(),
        "attaching response example"
    );
    let defaults = SerializerOptions::default();
    media::write_examples(content, source, options.unwrap_or(&defaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ExamplesProvider;
    use serde::Serialize;
    use serde_json::json;
    use trellis_openapi::{MediaType, Response};

    #[derive(Serialize)]
    struct Pet {
        name: String,
    }

    struct PetExample;

    impl ExamplesProvider for PetExample {
        type Output = Pet;

        fn example(&self) -> Pet {
            Pet {
                name: "Rex".to_string(),
            }
        }
    }

    fn operation_with_response(status: &str, media_type: &str) -> Operation {
        let mut operation = Operation::default();
        operation.responses.insert(
            status.to_string(),
            Response::new("OK").with_media_type(media_type, MediaType::new()),
        );
        operation
    }

    fn example_of(operation: &Operation, status: &str, media_type: &str) -> Option<serde_json::Value> {
        operation.responses[status].content.as_ref().unwrap()[media_type]
            .example
            .clone()
    }

    #[test]
    fn test_sets_example_on_matching_status() {
        let mut operation = operation_with_response("200", "application/json");

        set_response_example(&mut operation, 200, Some(&PetExample), None).unwrap();

        assert_eq!(
            example_of(&operation, "200", "application/json"),
            Some(json!({"name": "Rex"}))
        );
    }

    #[test]
    fn test_sets_example_on_every_recognized_media_type() {
        let mut operation = Operation::default();
        operation.responses.insert(
            "200".to_string(),
            Response::new("OK")
                .with_media_type("application/json", MediaType::new())
                .with_media_type("application/xml", MediaType::new())
                .with_media_type("text/plain", MediaType::new()),
        );

        set_response_example(&mut operation, 200, Some(&PetExample), None).unwrap();

        assert!(example_of(&operation, "200", "application/json").is_some());
        assert_eq!(
            example_of(&operation, "200", "application/xml"),
            Some(json!("<Pet><name>Rex</name></Pet>"))
        );
        // Unrecognized media types are left untouched.
        assert!(example_of(&operation, "200", "text/plain").is_none());
    }

    #[test]
    fn test_absent_status_is_a_no_op() {
        let mut operation = operation_with_response("200", "application/json");

        set_response_example(&mut operation, 404, Some(&PetExample), None).unwrap();

        assert!(example_of(&operation, "200", "application/json").is_none());
        assert!(!operation.responses.contains_key("404"));
    }

    #[test]
    fn test_none_source_never_mutates() {
        let mut operation = operation_with_response("200", "application/json");

        set_response_example(&mut operation, 200, None, None).unwrap();

        assert!(example_of(&operation, "200", "application/json").is_none());
    }

    #[test]
    fn test_overwrites_prior_example() {
        let mut operation = operation_with_response("200", "application/json");
        operation.responses.get_mut("200").unwrap().content.as_mut().unwrap()
            .get_mut("application/json")
            .unwrap()
            .example = Some(json!({"stale": true}));

        set_response_example(&mut operation, 200, Some(&PetExample), None).unwrap();

        assert_eq!(
            example_of(&operation, "200", "application/json"),
            Some(json!({"name": "Rex"}))
        );
    }

    #[test]
    fn test_response_without_content_is_a_no_op() {
        let mut operation = Operation::default();
        operation
            .responses
            .insert("204".to_string(), Response::new("No content"));

        set_response_example(&mut operation, 204, Some(&PetExample), None).unwrap();

        assert!(operation.responses["204"].content.is_none());
    }
}
