pub mod html;
pub mod list_navigation;
pub mod path;
pub mod text;

pub use list_navigation::{ListStateExt, DEFAULT_PAGE_SIZE};
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text::{format_timestamp, title_case_slug, truncate};
