use crate::asset::AssetRole;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required.", .0.label())]
    Missing(AssetRole),
    #[error("{} must be at most {}MB.", .role.label(), .limit / 1024 / 1024)]
    TooLarge {
        role: AssetRole,
        size: u64,
        limit: u64,
    },
    #[error("{} must be a JPG or PNG file.", .role.label())]
    UnsupportedType { role: AssetRole, path: PathBuf },
}

/// Field-scoped validation results for the two asset inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub product: Option<ValidationError>,
    pub logo: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.logo.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.product.iter().chain(self.logo.iter())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for FieldErrors {}

#[derive(Debug, Error)]
#[error("Failed to read {}: {source}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Transport(String),
    #[error("No image data found in API response.")]
    NoImageData,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Configuration(_) => ErrorKind::Configuration,
            GenerationError::Transport(_) => ErrorKind::Transport,
            GenerationError::NoImageData => ErrorKind::NoImageData,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Transport(e.to_string())
    }
}

/// A batch that did not fully succeed. Every failed call is kept with its
/// issue index; the successful ones are dropped.
#[derive(Debug)]
pub struct BatchError {
    pub failures: Vec<(usize, GenerationError)>,
    pub batch_size: usize,
}

impl BatchError {
    pub fn kind(&self) -> ErrorKind {
        self.failures
            .first()
            .map_or(ErrorKind::Transport, |(_, cause)| cause.kind())
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|(i, _)| *i).collect()
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.first() {
            Some((_, cause)) => write!(f, "Failed to generate images: {}", cause),
            None => write!(f, "Failed to generate images."),
        }
    }
}

impl std::error::Error for BatchError {}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to create zip file: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to create zip file: image {index} is not valid base64")]
    Decode { index: usize },
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for ArchiveError {
    fn from(e: std::io::Error) -> Self {
        ArchiveError::Zip(zip::result::ZipError::Io(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a base64 data URI")]
pub struct InvalidDataUri;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Read,
    Transport,
    NoImageData,
    Archive,
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Validation(#[from] FieldErrors),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

impl StudioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudioError::Validation(_) => ErrorKind::Validation,
            StudioError::Read(_) => ErrorKind::Read,
            StudioError::Generation(e) => e.kind(),
            StudioError::Batch(e) => e.kind(),
            StudioError::Archive(_) => ErrorKind::Archive,
        }
    }
}
