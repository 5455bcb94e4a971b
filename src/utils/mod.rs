pub mod layout;
pub mod path;
pub mod text_input;

// Export utilities that are used
pub use layout::{center_popup, create_standard_layout};
pub use path::{get_cache_dir, get_config_dir, get_config_path};
pub use text_input::TextInput;
