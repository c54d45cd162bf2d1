//! Command implementations

mod normalize;
mod ungraded;

pub use normalize::normalize;
pub use ungraded::ungraded;
