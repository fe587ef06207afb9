//! Formatting helpers for rendering tabular symmetry data.

pub(crate) mod format;
