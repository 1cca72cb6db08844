//! Example providers and operation filters for Trellis OpenAPI documents
//!
//! This crate decorates a generated [`trellis_openapi`] document with
//! request/response example payloads. Examples come from providers
//! registered in an [`ExamplesRegistry`] keyed by declared payload type, or
//! from explicit per-operation attachments; operation filters resolve and
//! render them into the `example` field of each matching media-type entry.
//!
//! Misses never fail document generation: an unregistered type, an
//! undocumented status code, or an unrecognized media type is simply
//! skipped. Only a value that cannot be serialized surfaces as an error.
//!
//! ## Quick Start
//!
//! ```
//! use serde::Serialize;
//! use trellis_filters::{
//!     ExamplesProvider, ExamplesRegistry, OperationContext, OperationFilter,
//!     RegistryExamplesFilter, TypeKey,
//! };
//! use trellis_openapi::{MediaType, Operation, Response};
//!
//! #[derive(Serialize)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! struct GreetingExample;
//!
//! impl ExamplesProvider for GreetingExample {
//!     type Output = Greeting;
//!
//!     fn example(&self) -> Greeting {
//!         Greeting {
//!             message: "hello".to_string(),
//!         }
//!     }
//! }
//!
//! let registry = ExamplesRegistry::new();
//! registry.register(GreetingExample);
//!
//! let mut operation = Operation::default();
//! operation.responses.insert(
//!     "200".to_string(),
//!     Response::new("OK").with_media_type("application/json", MediaType::new()),
//! );
//!
//! let ctx = OperationContext::new().with_response(200, TypeKey::of::<Greeting>());
//! let filter = RegistryExamplesFilter::new(registry);
//! filter.apply(&mut operation, &ctx).unwrap();
//!
//! let entry = &operation.responses["200"].content.as_ref().unwrap()["application/json"];
//! assert_eq!(entry.example, Some(serde_json::json!({"message": "hello"})));
//! ```
//!
//! ## Serializer Options
//!
//! ```
//! use serde::Serialize;
//! use trellis_filters::{serializer, KeyStyle, SerializerOptions};
//!
//! #[derive(Serialize)]
//! struct Person {
//!     first_name: String,
//! }
//!
//! let options = SerializerOptions::new().with_key_style(KeyStyle::Pascal);
//! let value = serializer::to_json_value(
//!     &Person {
//!         first_name: "Jane".to_string(),
//!     },
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(value, serde_json::json!({"FirstName": "Jane"}));
//! ```

pub mod context;
pub mod error;
pub mod filter;
pub mod key;
pub mod media;
pub mod provider;
pub mod registry;
pub mod request;
pub mod response;
pub mod serializer;

pub use context::{DeclaredParameter, DeclaredResponse, ExampleTarget, OperationContext};
pub use error::{ExampleError, ExampleResult};
pub use filter::{ExplicitExamplesFilter, FilterPipeline, OperationFilter, RegistryExamplesFilter};
pub use key::TypeKey;
pub use media::WireFormat;
pub use provider::{ErasedExamplesProvider, ExamplesProvider};
pub use registry::ExamplesRegistry;
pub use request::set_request_example;
pub use response::set_response_example;
pub use serializer::{KeyStyle, SerializerOptions};
