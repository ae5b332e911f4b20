pub mod confirm;
pub mod form;
pub mod menu;
pub mod table;
