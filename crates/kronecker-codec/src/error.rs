//! Errors reported by the Kronecker codec.

use thiserror::Error;

use crate::cast::CastError;

/// Errors that can occur while building limit tables or while encoding
/// and decoding.
///
/// Native values are carried widened to `i128` so that the error type is
/// shared by every integer width.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KroneckerError {
    /// The requested dimension has no entry in the limit table.
    #[error(
        "cannot Kronecker-code a sequence of size {size} with the signed integral type '{type_name}': \
         the maximum allowed size for this type is {max}"
    )]
    DimensionTooLarge {
        /// Requested dimension.
        size: usize,
        /// Largest dimension the type supports.
        max: usize,
        /// Name of the native integer type.
        type_name: &'static str,
    },

    /// A component to be encoded lies outside its symmetric bound.
    #[error(
        "element {index} of a sequence to be Kronecker-encoded is out of bounds: \
         the value is {value}, while the bounds are [-{bound}, {bound}]"
    )]
    ComponentOutOfRange {
        /// Position of the offending component.
        index: usize,
        /// Value of the offending component.
        value: i128,
        /// Bound for that position.
        bound: i128,
    },

    /// A code to be decoded lies outside the codomain of its dimension.
    #[error(
        "cannot Kronecker-decode {code} into a sequence of size {size}: \
         the value is outside the allowed bounds [{h_min}, {h_max}]"
    )]
    CodeOutOfRange {
        /// The code.
        code: i128,
        /// Requested dimension.
        size: usize,
        /// Smallest code for the dimension.
        h_min: i128,
        /// Largest code for the dimension.
        h_max: i128,
    },

    /// Only zero decodes into an empty sequence.
    #[error("only zero can be Kronecker-decoded into an empty sequence, but {code} was provided instead")]
    InvalidZeroSizeCode {
        /// The nonzero code.
        code: i128,
    },

    /// A component could not be converted between the caller's element
    /// type and the native integer type.
    #[error("element {index} could not be converted")]
    ComponentCastFailure {
        /// Position of the offending component.
        index: usize,
        /// Underlying conversion failure.
        #[source]
        source: CastError,
    },

    /// A component was pushed after the encoder was already full.
    #[error(
        "cannot push any more values to this Kronecker encoder: the number of values already pushed \
         is equal to the size used for construction ({size})"
    )]
    TooManyPushes {
        /// Size the encoder was created for.
        size: usize,
    },

    /// The code was requested before every component was pushed.
    #[error(
        "cannot fetch the code from this Kronecker encoder: the number of values pushed ({pushed}) \
         is less than the size used for construction ({size})"
    )]
    NotEnoughPushes {
        /// Components pushed so far.
        pushed: usize,
        /// Size the encoder was created for.
        size: usize,
    },

    /// A component was pulled after the decoder was exhausted.
    #[error(
        "cannot decode any more values from this Kronecker decoder: the number of values already \
         decoded is equal to the size used for construction ({size})"
    )]
    TooManyPulls {
        /// Size the decoder was created for.
        size: usize,
    },

    /// The limit search parameters are unusable.
    #[error("invalid limit search configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, KroneckerError>;
