use crate::channel::Channel;

#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("malformed curve data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{channel} curve needs at least 2 points, got {count}")]
    TooFewPoints { channel: Channel, count: usize },
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}
