//! OpenAPI 3.0 document model and builders for Trellis
//!
//! This crate holds the typed OpenAPI 3.0 specification model that the rest
//! of Trellis generates and decorates, along with fluent builders and
//! JSON/YAML export.
//!
//! ## Quick Start
//!
//! ```
//! use trellis_openapi::OpenApiBuilder;
//!
//! let spec = OpenApiBuilder::new("My API", "1.0.0")
//!     .description("A wonderful API")
//!     .server("http://localhost:3000", None)
//!     .build();
//!
//! assert_eq!(spec.info.title, "My API");
//! assert_eq!(spec.servers.len(), 1);
//! ```
//!
//! ## Paths and Operations
//!
//! ```
//! use trellis_openapi::{MediaType, OpenApiBuilder, OperationBuilder, PathItemBuilder, Response};
//!
//! let operation = OperationBuilder::new()
//!     .operation_id("getUser")
//!     .summary("Get user by ID")
//!     .response("200", Response::new("OK").with_media_type("application/json", MediaType::new()))
//!     .build();
//!
//! let spec = OpenApiBuilder::new("User API", "1.0.0")
//!     .path("/users/{id}", PathItemBuilder::new().get(operation).build())
//!     .build();
//!
//! assert!(spec.paths["/users/{id}"].get.is_some());
//! ```
//!
//! ## Export
//!
//! ```
//! use trellis_openapi::OpenApiBuilder;
//!
//! let spec = OpenApiBuilder::new("My API", "1.0.0").build();
//! let yaml = spec.to_yaml().unwrap();
//! assert!(yaml.contains("My API"));
//! ```

pub mod builder;
pub mod export;
pub mod spec;

pub use builder::*;
pub use export::ExportError;
pub use spec::*;
