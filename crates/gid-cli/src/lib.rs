//! CLI library components for the GID mapper.

pub mod input;
pub mod logging;
