//! Parameter and result value types for document service operations.
//!
//! Parameters are built by the caller and borrowed by the client; results are
//! decoded from response bodies. Neither is mutated after construction.

mod params;
mod results;
mod status;

pub use params::{
    ListDocumentsParams, QueryDocumentParams, ReadDocumentParams, RegisterDocumentParams,
};
pub use results::{
    DocumentError, DocumentImage, GetImagesResult, ListDocumentsResult, PublishInfo,
    QueryDocumentResult, ReadDocumentResult, RegisterDocumentResult, UploadInfo,
};
pub use status::{Access, DocumentStatus, TargetType};
