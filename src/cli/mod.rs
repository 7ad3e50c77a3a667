mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_drag, handle_edit, handle_front, handle_list, handle_recolor,
    handle_resize, handle_retitle, handle_trash,
};
