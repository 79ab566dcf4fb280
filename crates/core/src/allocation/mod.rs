//! Exact-sum splitting built on the correction core.

pub mod error;
pub mod split;


pub use error::AllocationError;
pub use split::SplitUtil;
