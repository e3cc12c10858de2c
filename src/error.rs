use thiserror::Error;

/// Errors produced while building a color scheme.
#[derive(Debug, Error)]
pub enum ColorzError {
    /// The image bytes could not be decoded.
    #[error("Unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A caller-supplied parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The population cannot be split into the requested number of clusters.
    #[error("Cannot find {requested} clusters among {distinct} distinct colors")]
    ConvergenceFailure { requested: usize, distinct: usize },

    /// A color string is not in `#rrggbb` form.
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// The HTML preview template failed to compile or render.
    #[error("Unable to render preview: {0}")]
    Template(#[from] minijinja::Error),

    /// No seed was given and the OS entropy source failed.
    #[error("Unable to seed k-means: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, ColorzError>;
