pub mod api;
pub mod client;
pub mod models;
pub mod utils;

pub use api::{decode_inline_data, first_image, generate_content, response_texts};
pub use client::{GeminiClient, PromptPart};
pub use models::{GeminiResponse, InlineData, Part, PartKind};
