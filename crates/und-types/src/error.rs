use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagError {
    #[error("Invalid parameter in {stage}: {message}")]
    InvalidParameter { stage: &'static str, message: String },

    #[error("Unknown magnet element kind: {0}")]
    UnknownElementKind(String),

    #[error("Overlapping magnet elements at sorted index {index}: previous ends at {prev_end}, next starts at {cur_start}")]
    OverlappingElements {
        index: usize,
        prev_end: f64,
        cur_start: f64,
    },

    #[error("Scratch buffer allocation failed: {0}")]
    Allocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MagResult<T> = Result<T, MagError>;
