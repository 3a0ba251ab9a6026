pub mod cart;
pub mod line_item;

pub use cart::*;
pub use line_item::*;
