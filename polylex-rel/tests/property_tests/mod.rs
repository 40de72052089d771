//! Property tests for the relation model:
//! - builder checkpoint/rollback discipline
//! - inequality negation
//! - row layout under extension

mod builder_properties;
