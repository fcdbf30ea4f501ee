mod button;
mod container;
mod input;

pub use button::{icon_button_style, nav_link_style, primary_button_style};
pub use container::{hero_chip_style, section_shell_style, toast_style, toolbar_style};
pub use input::input_style;
