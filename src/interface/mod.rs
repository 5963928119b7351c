pub mod prompts;
pub mod render;

pub use prompts::{prompt_override_target, prompt_override_value, prompt_yes_no};
pub use render::{display_catalog, display_items, format_price};
