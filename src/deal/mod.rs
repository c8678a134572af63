pub mod constants;
mod core;
mod errors;

pub use self::core::Deal;
pub use errors::DealError;
