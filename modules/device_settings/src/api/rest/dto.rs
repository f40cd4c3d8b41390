//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement returned by `POST /update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResponse {
    /// Always `true` once the document is stored
    #[schema(example = true)]
    pub ok: bool,
}

impl UpdateResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
