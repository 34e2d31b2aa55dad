pub mod rank;
pub mod tokens;

pub use rank::*;
pub use tokens::*;
