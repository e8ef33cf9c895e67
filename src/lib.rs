//! gridfill (workspace facade crate).
//!
//! Re-exports the member crates under one `gridfill::{core,input,term,types}`
//! namespace for the binary, the integration tests and the benchmarks.

pub use gridfill_core as core;
pub use gridfill_input as input;
pub use gridfill_term as term;
pub use gridfill_types as types;
