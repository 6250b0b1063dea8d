use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    #[error("depth {depth} must be less than or equal to {max}")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("invalid quad key {key:#x}")]
    InvalidKey { key: u64 },

    #[error("quad key {key:#x} is at the maximum depth and has no children")]
    MaxDepthReached { key: u64 },

    #[error("root quad key does not have a parent")]
    NoParent,

    /// The global bounds span more than an `f64` can hold, so coordinates cannot
    /// be normalized into the 32-bit integer space used for keys.
    #[error(
        "bounds span too large to normalize (width: {width}, height: {height}); \
         keep coordinates within the finite f32 range"
    )]
    DomainTooLarge { width: f64, height: f64 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
