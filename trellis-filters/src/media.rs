//! Media-type to wire-format mapping

use crate::error::ExampleResult;
use crate::provider::ErasedExamplesProvider;
use crate::serializer::SerializerOptions;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;
use trellis_openapi::MediaType;

/// The serialization family selected by a media-type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Xml,
}

impl WireFormat {
    /// Map a media-type string to its wire format.
    ///
    /// Recognizes the canonical JSON/XML types, their `text/` variants, and
    /// `+json`/`+xml` structured-syntax suffixes. Media-type parameters
    /// (`; charset=...`) are ignored. Returns `None` for anything else;
    /// such entries are skipped rather than treated as errors.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/json" | "text/json" => Some(WireFormat::Json),
            "application/xml" | "text/xml" => Some(WireFormat::Xml),
            _ if essence.ends_with("+json") => Some(WireFormat::Json),
            _ if essence.ends_with("+xml") => Some(WireFormat::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Json => f.write_str("json"),
            WireFormat::Xml => f.write_str("xml"),
        }
    }
}

/// Render the example into every recognized media-type entry, overwriting
/// any prior example. Entries either keep their old value (unrecognized
/// media type) or receive the complete new one; there is no partial state.
pub(crate) fn write_examples(
    content: &mut HashMap<String, MediaType>,
    source: &dyn ErasedExamplesProvider,
    options: &SerializerOptions,
) -> ExampleResult<()> {
    for (media_type, entry) in content.iter_mut() {
        let Some(format) = WireFormat::from_media_type(media_type) else {
            trace!(media_type = %media_type, "no example format for media type, skipping entry");
            continue;
        };
        entry.example = Some(source.render(format, options)?);
    }
    Ok(())
}
