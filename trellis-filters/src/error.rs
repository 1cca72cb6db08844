//! Error types for example generation

use crate::media::WireFormat;
use thiserror::Error;

/// Errors raised while attaching examples to a document.
///
/// Absent providers, unmatched status codes, and unrecognized media types are
/// not errors: they are normal no-ops during document generation. The only
/// condition that propagates is a value that cannot be serialized in the
/// requested format.
#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("failed to serialize example of `{type_name}` as {format}: {detail}")]
    Serialization {
        type_name: &'static str,
        format: WireFormat,
        detail: String,
    },

    #[error("example generation failed for operation `{operation_id}`: {source}")]
    Operation {
        operation_id: String,
        #[source]
        source: Box<ExampleError>,
    },
}

impl ExampleError {
    pub(crate) fn serialization<T: ?Sized>(format: WireFormat, detail: impl ToString) -> Self {
        ExampleError::Serialization {
            type_name: std::any::type_name::<T>(),
            format,
            detail: detail.to_string(),
        }
    }

    pub(crate) fn operation(operation_id: impl Into<String>, source: ExampleError) -> Self {
        ExampleError::Operation {
            operation_id: operation_id.into(),
            source: Box::new(source),
        }
    }
}

/// Result alias used throughout the crate
pub type ExampleResult<T> = Result<T, ExampleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_names_type_and_format() {
        let err = ExampleError::serialization::<String>(WireFormat::Xml, "boom");
        let message = err.to_string();

        assert!(message.contains("alloc::string::String"));
        assert!(message.contains("xml"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_operation_error_wraps_source() {
        let inner = ExampleError::serialization::<i64>(WireFormat::Json, "bad value");
        let err = ExampleError::operation("getUser", inner);

        assert!(err.to_string().contains("getUser"));
        assert!(err.to_string().contains("bad value"));
    }
}
