//! Property tests for the solver boundary:
//! - matrix encoder layout invariants

mod encode_properties;
