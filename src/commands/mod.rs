//! Command implementations for graphtrace

pub mod compare;
pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod pseudocode;
pub mod run;
pub mod state;
