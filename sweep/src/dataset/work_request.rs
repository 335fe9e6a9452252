use serde::{Deserialize, Serialize};

/// One synthetic request, serialized as a single JSON-lines entry.
///
/// `output_tokens` is not derived from the prompt: it is the requested
/// response length, passed through unchanged for the load generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRequest {
    pub task_id: u64,
    pub prompt: String,
    pub output_tokens: u64,
}
