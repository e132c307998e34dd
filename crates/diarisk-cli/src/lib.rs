//! Shared library surface for the diarisk binary.

pub mod logging;
