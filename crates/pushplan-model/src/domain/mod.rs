mod constants;
pub use constants::PROCESS_TYPE_WEB;

mod remaining;
pub use remaining::RemainingFields;

pub(crate) mod serde_helpers;
