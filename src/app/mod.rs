//! Command orchestration for the `xyxyx` binary.

pub(crate) mod commands;
pub(crate) mod entry;
