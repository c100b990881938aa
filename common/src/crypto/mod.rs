mod address;
mod hash;

pub use address::*;
pub use hash::*;
