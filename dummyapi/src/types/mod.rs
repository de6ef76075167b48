mod item;
mod page;

pub use item::*;
pub use page::*;
