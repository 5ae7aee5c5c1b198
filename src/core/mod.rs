//! Core building blocks: the invocation record with its documented
//! defaults, and the positional token encoding the solver consumes.
//! These are internal primitives consumed by the high-level `api` module.
pub mod encode;
pub mod params;
