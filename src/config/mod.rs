mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_INTERVAL_PACE, DEFAULT_MIN_INTERVAL_DISTANCE, DEFAULT_NAME_PATTERN,
    DEFAULT_START_DATE, FilterConfig, IntervalsConfig, OutputConfig,
};
