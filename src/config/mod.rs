pub mod dto;
pub mod loader;

pub use dto::{AutomationConfig, ServerConfig};
pub use loader::{load_automation_config, load_server_config};
