pub mod content;
pub mod cover;
pub mod list;
pub mod section;
