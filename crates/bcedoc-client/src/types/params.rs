//! Operation parameters supplied by the caller.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Access, DocumentStatus, TargetType};
use crate::{Error, Result};

/// Title and format of a document being registered.
///
/// Serialized as the JSON body of the register request; optional fields are
/// omitted when unset so the service applies its own defaults.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDocumentParams {
    /// Display title of the document.
    #[validate(length(min = 1))]
    pub title: String,
    /// Source file format, e.g. `pdf` or `docx`.
    #[validate(length(min = 1))]
    pub format: String,
    /// Conversion target; the service defaults to `h5`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    /// Name of a notification configured in the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    /// Access level of the converted document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

impl RegisterDocumentParams {
    /// Creates register parameters with the required fields.
    pub fn new(title: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            format: format.into(),
            target_type: None,
            notification: None,
            access: None,
        }
    }

    /// Sets the conversion target.
    pub fn with_target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    /// Sets the notification to trigger when conversion completes.
    pub fn with_notification(mut self, notification: impl Into<String>) -> Self {
        self.notification = Some(notification.into());
        self
    }

    /// Sets the access level.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }
}

/// Modifiers for querying a single document.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryDocumentParams {
    /// Whether the returned cover URL uses HTTPS.
    pub https: bool,
}

impl QueryDocumentParams {
    /// Creates query parameters.
    pub fn new(https: bool) -> Self {
        Self { https }
    }
}

/// Modifiers for obtaining a read token.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadDocumentParams {
    /// Requested token lifetime in seconds.
    pub expire_in_seconds: i64,
}

impl ReadDocumentParams {
    /// Creates read parameters.
    pub fn new(expire_in_seconds: i64) -> Self {
        Self { expire_in_seconds }
    }
}

/// Optional filters and pagination for listing documents.
///
/// Every field left at its default is omitted from the request.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsParams {
    /// Only list documents in this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    /// Pagination cursor returned by a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Page size; `0` selects the service default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
}

impl ListDocumentsParams {
    /// Creates empty list parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by document status.
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Continues from a pagination marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the page size.
    pub fn with_max_size(mut self, max_size: i64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Returns the status filter to send, if any.
    pub fn effective_status(&self) -> Option<DocumentStatus> {
        self.status
    }

    /// Returns the marker to send, if any. Empty markers are not sent.
    pub fn effective_marker(&self) -> Option<&str> {
        self.marker.as_deref().filter(|marker| !marker.is_empty())
    }

    /// Returns the page size to send, if any. Zero is the service default and is not sent.
    pub fn effective_max_size(&self) -> Option<i64> {
        self.max_size.filter(|max_size| *max_size != 0)
    }

    /// Checks the filters against the page size limit accepted by the service.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the status is not a listable state or
    /// the page size is negative or above `max_page_size`.
    pub fn check(&self, max_page_size: i64) -> Result<()> {
        if let Some(status) = self.status
            && !status.is_filterable()
        {
            return Err(Error::invalid_input().with_message("status is not a valid list filter"));
        }

        if let Some(max_size) = self.max_size
            && !(0..=max_page_size).contains(&max_size)
        {
            return Err(Error::invalid_input().with_message(format!(
                "maxSize must be between 0 and {max_page_size}, got {max_size}"
            )));
        }

        Ok(())
    }
}
