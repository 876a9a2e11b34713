#[macro_use]
mod macros;
pub mod parsing;
pub mod traits;

pub use traits::*;
