pub mod audio;
pub mod constants;
pub mod error;
pub mod name_list;
pub mod results;
pub mod selection;
pub mod share_link;
pub mod shared_wheel_game;
pub mod week_label;

pub use error::{Error, Result};
