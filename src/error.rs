use thiserror::Error;

/// Result alias used across the public API.
pub type Result<T> = std::result::Result<T, EdumapError>;

/// Errors produced while acquiring, joining, or rendering the map.
#[derive(Debug, Error)]
pub enum EdumapError {
    /// A document source could not be read (network or filesystem).
    #[error("failed to fetch {source_name}: {message}")]
    Fetch { source_name: String, message: String },

    /// A document was fetched but is not valid JSON of the expected shape.
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An education record is missing a required field or carries a bad value.
    #[error("invalid education record #{index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// The topology document cannot be converted into regions.
    #[error("malformed topology: {0}")]
    MalformedTopology(String),

    /// The color scale needs at least one record to define its domain.
    #[error("education dataset is empty; cannot derive a color scale domain")]
    EmptyDataset,

    /// The color scale was given no colors to map onto.
    #[error("color palette is empty; at least one color is required")]
    EmptyPalette,

    /// The color scale domain maximum is NaN or infinite.
    #[error("non-finite attainment value {0} in color scale domain")]
    NonFiniteValue(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EdumapError {
    pub(crate) fn fetch(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch { source_name: source_name.into(), message: message.to_string() }
    }

    pub(crate) fn topology(message: impl Into<String>) -> Self {
        Self::MalformedTopology(message.into())
    }
}
