pub mod console;
pub mod page;

pub use console::Command;
pub use page::{Page, PageSnapshot, SelectControl};
