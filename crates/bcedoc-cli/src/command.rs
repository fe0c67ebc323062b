//! Subcommands, one per document service operation.

use bcedoc_client::{
    Access, DocumentApi, DocumentStatus, Error, ListDocumentsParams, QueryDocumentParams,
    ReadDocumentParams, RegisterDocumentParams, Result, TargetType,
};
use clap::Subcommand;
use serde::Serialize;
use serde_json::{Value, json};
use strum::IntoStaticStr;

use crate::TRACING_TARGET_COMMAND;

/// Operation to run against the document service.
#[derive(Debug, Clone, Subcommand, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Register a document and print where to upload its source file
    Register {
        /// Document title
        #[arg(long)]
        title: String,
        /// Source file format, e.g. pdf or docx
        #[arg(long)]
        format: String,
        /// Conversion target (h5 or image)
        #[arg(long)]
        target_type: Option<TargetType>,
        /// Notification name to call back when conversion ends
        #[arg(long)]
        notification: Option<String>,
        /// Access level (PUBLIC or PRIVATE)
        #[arg(long)]
        access: Option<Access>,
    },

    /// Start conversion of an uploaded document
    Publish { document_id: String },

    /// Print the current state of a document
    Query {
        document_id: String,
        /// Request https links in the result
        #[arg(long)]
        https: Option<bool>,
    },

    /// Obtain a reader token for a document
    Read {
        document_id: String,
        /// Token lifetime in seconds
        #[arg(long)]
        expire_in_seconds: Option<i64>,
    },

    /// List the page images of a converted document
    Images { document_id: String },

    /// Delete a document
    Delete { document_id: String },

    /// List documents
    List {
        /// Only list documents in this state
        #[arg(long)]
        status: Option<DocumentStatus>,
        /// Continue from a pagination marker
        #[arg(long)]
        marker: Option<String>,
        /// Page size
        #[arg(long)]
        max_size: Option<i64>,
        /// Follow pagination markers and print every document
        #[arg(long)]
        all: bool,
    },
}

impl Command {
    /// Returns the operation name used in logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Runs the operation and returns its result as JSON.
    pub async fn execute(&self, api: &dyn DocumentApi) -> Result<Value> {
        let output = match self {
            Self::Register {
                title,
                format,
                target_type,
                notification,
                access,
            } => {
                let mut params = RegisterDocumentParams::new(title, format);
                if let Some(target_type) = target_type {
                    params = params.with_target_type(*target_type);
                }
                if let Some(notification) = notification {
                    params = params.with_notification(notification);
                }
                if let Some(access) = access {
                    params = params.with_access(*access);
                }
                to_output(&api.register(&params).await?)?
            }
            Self::Publish { document_id } => {
                api.publish(document_id).await?;
                json!({ "documentId": document_id })
            }
            Self::Query { document_id, https } => {
                let params = https.map(QueryDocumentParams::new);
                to_output(&api.query(document_id, params.as_ref()).await?)?
            }
            Self::Read {
                document_id,
                expire_in_seconds,
            } => {
                let params = expire_in_seconds.map(ReadDocumentParams::new);
                to_output(&api.read(document_id, params.as_ref()).await?)?
            }
            Self::Images { document_id } => to_output(&api.get_images(document_id).await?)?,
            Self::Delete { document_id } => {
                api.delete(document_id).await?;
                json!({ "documentId": document_id })
            }
            Self::List {
                status,
                marker,
                max_size,
                all,
            } => {
                let params = ListDocumentsParams {
                    status: *status,
                    marker: marker.clone(),
                    max_size: *max_size,
                };

                if *all {
                    list_all(api, params).await?
                } else {
                    to_output(&api.list(&params).await?)?
                }
            }
        };

        Ok(output)
    }
}

/// Lists every page starting from `params` and returns the documents as one array.
async fn list_all(api: &dyn DocumentApi, mut params: ListDocumentsParams) -> Result<Value> {
    let mut docs = Vec::new();
    let mut pages = 0_usize;

    loop {
        let page = api.list(&params).await?;
        pages += 1;

        let next = page.next_page_params(&params);
        docs.extend(page.docs);

        match next {
            Some(next) if next.marker != params.marker => params = next,
            Some(next) => {
                tracing::debug!(
                    target: TRACING_TARGET_COMMAND,
                    marker = ?next.marker,
                    "Next marker did not advance, stopping"
                );
                break;
            }
            None => break,
        }
    }

    tracing::debug!(
        target: TRACING_TARGET_COMMAND,
        pages,
        documents = docs.len(),
        "Listed all documents"
    );

    to_output(&docs)
}

/// Converts a result into the JSON printed on stdout.
fn to_output<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| {
        Error::serialization()
            .with_message("Failed to encode command output")
            .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use bcedoc_client::{DocumentClient, ErrorKind, MockTransport};
    use clap::Parser;

    use super::*;
    use crate::config::Cli;

    fn parse(args: &[&str]) -> Command {
        let args = std::iter::once("bcedoc").chain(args.iter().copied());
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_command_names() {
        assert_eq!(parse(&["images", "doc-1"]).name(), "images");
        assert_eq!(parse(&["list"]).name(), "list");
    }

    #[test]
    fn test_parse_register_options() {
        let command = parse(&[
            "register",
            "--title",
            "Report",
            "--format",
            "pdf",
            "--target-type",
            "image",
            "--access",
            "private",
        ]);

        let Command::Register {
            target_type,
            access,
            ..
        } = command
        else {
            panic!("expected register command");
        };
        assert_eq!(target_type, Some(TargetType::Image));
        assert_eq!(access, Some(Access::Private));
    }

    #[tokio::test]
    async fn test_register_prints_upload_location() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({ "documentId": "doc-1", "bucket": "bkt", "object": "doc-1.pdf" }),
        );
        let client = DocumentClient::new(transport.clone());

        let command = parse(&["register", "--title", "Report", "--format", "pdf"]);
        let output = command.execute(&client).await.unwrap();

        assert_eq!(output["documentId"], "doc-1");
        assert_eq!(output["bucket"], "bkt");

        let request = transport.last_request().unwrap();
        assert!(request.has_param("register"));
    }

    #[tokio::test]
    async fn test_query_without_https_sends_no_params() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({ "documentId": "doc-1", "status": "PROCESSING" }));
        let client = DocumentClient::new(transport.clone());

        let output = parse(&["query", "doc-1"]).execute(&client).await.unwrap();

        assert_eq!(output["status"], "PROCESSING");
        assert_eq!(transport.last_request().unwrap().query_string(), "");
    }

    #[tokio::test]
    async fn test_delete_echoes_document_id() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({}));
        let client = DocumentClient::new(transport.clone());

        let output = parse(&["delete", "doc-1"]).execute(&client).await.unwrap();
        assert_eq!(output, json!({ "documentId": "doc-1" }));
    }

    #[tokio::test]
    async fn test_list_all_follows_markers() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({
                "isTruncated": true,
                "nextMarker": "m2",
                "docs": [{ "documentId": "doc-1", "status": "PUBLISHED" }]
            }),
        );
        transport.push_json(
            200,
            json!({
                "marker": "m2",
                "isTruncated": false,
                "docs": [{ "documentId": "doc-2", "status": "PUBLISHED" }]
            }),
        );
        let client = DocumentClient::new(transport.clone());

        let command = parse(&["list", "--status", "published", "--all"]);
        let output = command.execute(&client).await.unwrap();

        assert_eq!(output.as_array().map(Vec::len), Some(2));
        assert_eq!(output[1]["documentId"], "doc-2");

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].param("marker"), Some("m2"));
        assert_eq!(requests[1].param("status"), Some("PUBLISHED"));
    }

    #[tokio::test]
    async fn test_list_all_stops_when_marker_does_not_advance() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({
                "isTruncated": true,
                "nextMarker": "m1",
                "docs": [{ "documentId": "doc-1", "status": "PUBLISHED" }]
            }),
        );
        transport.push_json(
            200,
            json!({
                "marker": "m1",
                "isTruncated": true,
                "nextMarker": "m1",
                "docs": [{ "documentId": "doc-2", "status": "PUBLISHED" }]
            }),
        );
        let client = DocumentClient::new(transport.clone());

        let output = parse(&["list", "--all"]).execute(&client).await.unwrap();

        assert_eq!(output.as_array().map(Vec::len), Some(2));
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn test_output_encoding_failure_is_reported_as_output_error() {
        let unencodable = std::collections::BTreeMap::from([((1, 2), "non-string key")]);

        let error = to_output(&unencodable).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Serialization);
        assert_eq!(error.message.as_deref(), Some("Failed to encode command output"));
    }

    #[tokio::test]
    async fn test_invalid_list_size_is_rejected_before_sending() {
        let transport = MockTransport::new();
        let client = DocumentClient::new(transport.clone());

        let error = parse(&["list", "--max-size", "500"])
            .execute(&client)
            .await
            .unwrap_err();

        assert_eq!(error.kind, ErrorKind::InvalidInput);
        assert_eq!(transport.call_count(), 0);
    }
}
