//! Clean Use Case
//!
//! Removes the output directory of a build.

mod result;
mod use_case;

pub use result::CleanResult;
pub use use_case::clean_output;
