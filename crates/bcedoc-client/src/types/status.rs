//! Enumerations shared by parameters and results.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Lifecycle state of a document, owned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DocumentStatus {
    /// Registered; the source file is still being uploaded.
    Uploading,
    /// Conversion is in progress.
    Processing,
    /// Conversion finished and the document can be read.
    Published,
    /// Conversion failed; see the document's error info.
    Failed,
    /// A status this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    /// Returns whether the status may be sent as a list filter.
    pub const fn is_filterable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Conversion target produced by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetType {
    /// Paged HTML for the browser reader.
    H5,
    /// One image per page.
    Image,
}

/// Access level of the converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Access {
    /// Readable without a token.
    Public,
    /// Readable only with a token obtained from a read operation.
    Private,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(DocumentStatus::Published.as_ref(), "PUBLISHED");
        assert_eq!(
            DocumentStatus::from_str("PROCESSING").unwrap(),
            DocumentStatus::Processing
        );
        assert_eq!(
            DocumentStatus::from_str("published").unwrap(),
            DocumentStatus::Published
        );
        assert_eq!(TargetType::from_str("IMAGE").unwrap(), TargetType::Image);
    }

    #[test]
    fn test_unrecognized_status_decodes_as_unknown() {
        let status: DocumentStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, DocumentStatus::Unknown);
        assert!(!status.is_filterable());
    }

    #[test]
    fn test_target_type_and_access_serde() {
        assert_eq!(serde_json::to_string(&TargetType::H5).unwrap(), "\"h5\"");
        assert_eq!(serde_json::to_string(&Access::Private).unwrap(), "\"PRIVATE\"");
    }
}
