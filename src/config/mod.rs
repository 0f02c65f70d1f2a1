// Configuration

mod loader;
mod settings;

pub use loader::load_settings;
pub use settings::{Settings, TrainingSettings};
