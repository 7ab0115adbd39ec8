pub mod document;
pub mod editor;
pub mod repair;
pub mod state;
pub mod wage;
