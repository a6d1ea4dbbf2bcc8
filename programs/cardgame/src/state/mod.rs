pub mod registry;
pub mod user_info;

pub use registry::*;
pub use user_info::*;
