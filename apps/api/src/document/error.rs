use thiserror::Error;

/// Failure turning a finished document into a package byte stream.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to pack document package: {0}")]
    Package(String),
}
