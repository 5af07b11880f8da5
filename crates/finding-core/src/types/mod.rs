mod common;
mod item;
mod response;

pub use common::*;
pub use item::*;
pub use response::*;
