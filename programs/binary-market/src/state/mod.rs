mod keys;
mod market;
mod outcome;
mod registry;
mod user_position;

pub use self::keys::*;
pub use self::market::*;
pub use self::outcome::*;
pub use self::registry::*;
pub use self::user_position::*;
