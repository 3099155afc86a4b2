// HTTP routes
pub mod generate;
pub mod health;
pub mod pages;

pub use generate::*;
pub use health::*;
pub use pages::*;
