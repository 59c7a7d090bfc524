//! Bidirectional codec between configuration dimension vectors and the
//! condition-expression strings that gate legacy project-file fragments.
//!
//! Only the canonical per-dimension-equality form is accepted:
//!
//! ```text
//! '$(Configuration)|$(Platform)'=='Debug|AnyCPU'
//! ```
//!
//! Malformed conditions are an expected input from real-world legacy
//! documents, so parsing reports failure as a value and never panics.

mod codec;
mod vector;

pub use codec::ConditionParseError;
pub use codec::Operand;
pub use codec::configuration_name;
pub use codec::parse_condition;
pub use codec::serialize_condition;
pub use vector::DimensionVector;
pub use vector::is_valid_dimension_name;
