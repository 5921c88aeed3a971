mod commands;
mod config;
mod constants;
mod fs_utils;
mod models;

pub use commands::clean::{run_clean, strip_metadata, verify_metadata_clean};
pub use commands::edit::{run_edit, GenerationLogEntry};

pub use config::EditorConfig;

pub use constants::{
    API_KEY_ENV, CLEAN_EXTENSIONS, DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, EDIT_PROMPT,
    GENERATION_LOG_FILE, INPUT_DIR_NAME, INPUT_EXTENSIONS, OUTPUT_DIR_NAME,
};

pub use fs_utils::processed_file_name;
pub use models::{BatchSummary, FileOutcome};
