//! Command handlers for the `oxygen` tool.

pub(crate) mod icons;
pub(crate) mod replay;
pub(crate) mod theme;
