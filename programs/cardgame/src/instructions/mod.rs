pub mod initialize_registry;
pub mod login;
pub mod record_result;

pub use initialize_registry::*;
pub use login::*;
pub use record_result::*;
