//! Figedit - console editor for figure records
//!
//! The core is the format registry in [`storage`], which picks a codec from
//! the file suffix. This library exports it for testing and reuse.

pub mod editor;
pub mod logging;
pub mod models;
pub mod storage;
