use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no issue type selected: pick a category before replacing all")]
    NoTypeSelected,

    #[error("segment index {index} out of range (have {len} segments)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("segment {index} ({kind}) cannot be replaced")]
    NotReplaceable { index: usize, kind: String },

    #[error("segment {index} is not interactive")]
    NotInteractive { index: usize },
}
