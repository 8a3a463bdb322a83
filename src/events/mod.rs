pub mod menu;
pub mod scroll;

pub use menu::wire_menu;
pub use scroll::wire_scroll;
