use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(u32),
}

pub type Result<T> = std::result::Result<T, PdfError>;
