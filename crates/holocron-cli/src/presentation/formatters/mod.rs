pub mod text;

pub use text::{list_or_dash, truncate};
