//! Builders for creating OpenAPI specifications programmatically

use crate::spec::*;
use std::collections::HashMap;

/// Builder for OpenAPI specifications
#[derive(Debug, Clone)]
pub struct OpenApiBuilder {
    spec: OpenApiSpec,
}

impl OpenApiBuilder {
    /// Create a new OpenAPI builder
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            spec: OpenApiSpec {
                openapi: "3.0.0".to_string(),
                info: Info {
                    title: title.into(),
                    version: version.into(),
                    description: None,
                    contact: None,
                    license: None,
                },
                servers: Vec::new(),
                paths: HashMap::new(),
                components: Some(Components::default()),
                tags: Vec::new(),
            },
        }
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.info.description = Some(description.into());
        self
    }

    /// Add contact information
    pub fn contact(
        mut self,
        name: Option<String>,
        url: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.spec.info.contact = Some(Contact { name, url, email });
        self
    }

    /// Add license
    pub fn license(mut self, name: impl Into<String>, url: Option<String>) -> Self {
        self.spec.info.license = Some(License {
            name: name.into(),
            url,
        });
        self
    }

    /// Add a server
    pub fn server(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.spec.servers.push(Server {
            url: url.into(),
            description,
        });
        self
    }

    /// Add a tag
    pub fn tag(mut self, name: impl Into<String>, description: Option<String>) -> Self {
        self.spec.tags.push(Tag {
            name: name.into(),
            description,
        });
        self
    }

    /// Add a path
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.spec.paths.insert(path.into(), item);
        self
    }

    /// Add a schema component
    pub fn schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        if let Some(ref mut components) = self.spec.components {
            components.schemas.insert(name.into(), schema);
        }
        self
    }

    /// Build the OpenAPI specification
    pub fn build(self) -> OpenApiSpec {
        self.spec
    }
}

/// Builder for path items
pub struct PathItemBuilder {
    item: PathItem,
}

impl PathItemBuilder {
    pub fn new() -> Self {
        Self {
            item: PathItem::default(),
        }
    }

    pub fn get(mut self, operation: Operation) -> Self {
        self.item.get = Some(operation);
        self
    }

    pub fn post(mut self, operation: Operation) -> Self {
        self.item.post = Some(operation);
        self
    }

    pub fn put(mut self, operation: Operation) -> Self {
        self.item.put = Some(operation);
        self
    }

    pub fn delete(mut self, operation: Operation) -> Self {
        self.item.delete = Some(operation);
        self
    }

    pub fn patch(mut self, operation: Operation) -> Self {
        self.item.patch = Some(operation);
        self
    }

    pub fn build(self) -> PathItem {
        self.item
    }
}

impl Default for PathItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for operations
pub struct OperationBuilder {
    operation: Operation,
}

impl OperationBuilder {
    pub fn new() -> Self {
        Self {
            operation: Operation::default(),
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.operation.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.operation.description = Some(description.into());
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation.operation_id = Some(id.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.operation.tags.push(tag.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.operation.parameters.push(parameter);
        self
    }

    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.operation.request_body = Some(body);
        self
    }

    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.operation.responses.insert(status.into(), response);
        self
    }

    pub fn build(self) -> Operation {
        self.operation
    }
}

impl Default for OperationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for creating schemas
pub fn string_schema() -> Schema {
    Schema {
        schema_type: Some("string".to_string()),
        ..Default::default()
    }
}

pub fn integer_schema() -> Schema {
    Schema {
        schema_type: Some("integer".to_string()),
        format: Some("int64".to_string()),
        ..Default::default()
    }
}

pub fn number_schema() -> Schema {
    Schema {
        schema_type: Some("number".to_string()),
        format: Some("double".to_string()),
        ..Default::default()
    }
}

pub fn boolean_schema() -> Schema {
    Schema {
        schema_type: Some("boolean".to_string()),
        ..Default::default()
    }
}

pub fn array_schema(items: Schema) -> Schema {
    Schema {
        schema_type: Some("array".to_string()),
        items: Some(Box::new(items)),
        ..Default::default()
    }
}

pub fn object_schema(properties: HashMap<String, Schema>, required: Vec<String>) -> Schema {
    Schema {
        schema_type: Some("object".to_string()),
        properties: Some(properties),
        required,
        ..Default::default()
    }
}

pub fn ref_schema(reference: impl Into<String>) -> Schema {
    Schema {
        reference: Some(format!("#/components/schemas/{}", reference.into())),
        ..Default::default()
    }
}
