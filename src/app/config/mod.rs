//! Parameter loading for the CLI and library entry points.
//!
//! Parameter files are normalized into a YAML document first so that the
//! same override logic and the same `RawParams` deserializer apply no
//! matter which format the operator wrote.

mod load_params;
mod overrides;

pub use load_params::{ParamsFormat, load_params, parse_params};
pub use overrides::{Override, apply_overrides};
