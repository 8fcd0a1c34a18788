//! Request payload for the `GetImages` GraphQL operation.

use serde::{Deserialize, Serialize};

/// The fixed GraphQL document sent with every request.
pub const GET_IMAGES_QUERY: &str = r#"
query GetImages($input: QueryImagesInput!) {
  images(input: $input) {
    images {
      _id
      dateTimeOriginal
      timezone
      dateAdded
      cameraId
      make
      originalFileName
      fileTypeExtension
      deploymentId
      projectId
      awaitingPrediction
      objects {
        _id
        bbox
        locked
        labels {
          _id
          type
          conf
          bbox
          labeledDate
          labelId
          validation {
            validated
            validationDate
            userId
          }
          mlModel
          userId
        }
        comments {
          _id
          author
          created
          comment
        }
        reviewed
      }
    }
    pageInfo {
      previous
      hasPrevious
      next
      hasNext
    }
  }
}
"#;

/// Field the server paginates on.
pub const PAGINATED_FIELD: &str = "dateTimeAdjusted";

/// Full GraphQL request body: `query`, `variables`, `operationName`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Variables,
    #[serde(rename = "operationName")]
    pub operation_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variables {
    pub input: QueryImagesInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryImagesInput {
    pub paginated_field: String,
    pub sort_ascending: bool,
    pub limit: usize,
    pub filters: ImageFilters,
}

/// Image query filters. Every field except `labels` stays null; serde
/// serializes the `None`s explicitly so the server sees the full shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilters {
    pub cameras: Option<Vec<String>>,
    pub deployments: Option<Vec<String>>,
    pub labels: Option<Vec<String>>,
    pub created_start: Option<String>,
    pub created_end: Option<String>,
    pub added_start: Option<String>,
    pub added_end: Option<String>,
    pub reviewed: Option<bool>,
    pub custom: Option<String>,
}

/// Build the request body for a given label subset and page limit.
pub fn build_get_images_request(labels: Vec<String>, limit: usize) -> GraphqlRequest {
    GraphqlRequest {
        query: GET_IMAGES_QUERY.to_string(),
        variables: Variables {
            input: QueryImagesInput {
                paginated_field: PAGINATED_FIELD.to_string(),
                sort_ascending: false,
                limit,
                filters: ImageFilters {
                    cameras: None,
                    deployments: None,
                    labels: Some(labels),
                    created_start: None,
                    created_end: None,
                    added_start: None,
                    added_end: None,
                    reviewed: None,
                    custom: None,
                },
            },
        },
        operation_name: "GetImages".to_string(),
    }
}
