use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("font unavailable: family=`{family}`, size={size_px}px")]
    FontUnavailable { family: String, size_px: f64 },

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
