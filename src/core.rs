pub mod display;
pub mod history;
pub mod section;
pub mod table;
pub mod templates;
