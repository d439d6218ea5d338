#[doc(hidden)]
pub mod _private {
    pub use rustversion;
}

pub mod macros;
pub mod math;
pub mod sys;
pub mod traits;
pub mod uint;

pub use crate::uint::U256;
