//! UI widgets

pub mod tree_menu;

pub use tree_menu::TreeMenu;
