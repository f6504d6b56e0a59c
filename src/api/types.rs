use serde::Serialize;
use serde_json::Value as JsonValue;

/// An upstream blockchain.info document passed through unchanged
/// (address info or transaction info).
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[schema(value_type = Object)]
pub struct UpstreamDocument(pub JsonValue);
