pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, wire_resize};
pub use scroll::{sample_scroll, wire_scroll_handler};
