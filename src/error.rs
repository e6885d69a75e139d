use thiserror::Error;

/// The ways an operation on an [`OrderedBinaryTree`][crate::OrderedBinaryTree] can be refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation that needs an element was given none. The `&'static str` names the
    /// operation.
    #[error("[Tree] `{0}` requires an element but none was given")]
    InvalidArgument(&'static str),
}

/// Shorthand for results of fallible tree operations.
pub type Result<T> = std::result::Result<T, Error>;
