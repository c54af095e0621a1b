mod generate_mode;
mod menu_mode;

pub use generate_mode::generate_mode;
pub use menu_mode::menu_mode;
