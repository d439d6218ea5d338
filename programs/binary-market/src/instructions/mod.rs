pub mod claim_winnings;
pub mod create_market;
pub mod get_market;
pub mod get_market_count;
pub mod get_owner;
pub mod get_user_position;
pub mod initialize_registry;
pub mod place_bet;
pub mod resolve_market;

pub use self::claim_winnings::*;
pub use self::create_market::*;
pub use self::get_market::*;
pub use self::get_market_count::*;
pub use self::get_owner::*;
pub use self::get_user_position::*;
pub use self::initialize_registry::*;
pub use self::place_bet::*;
pub use self::resolve_market::*;
