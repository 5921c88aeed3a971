use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use geminiapi::utils::detect_mime_type;
use geminiapi::{
    decode_inline_data, first_image, generate_content, response_texts, GeminiClient, PromptPart,
};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::fs::try_exists;

use crate::config::EditorConfig;
use crate::constants::{EDIT_PROMPT, GENERATION_LOG_FILE};
use crate::fs_utils::{collect_input_images, ensure_dir, processed_file_name};
use crate::models::BatchSummary;

/// Sends every image in `input_dir` (flat, sorted by name) to the Gemini
/// image generation API with the fixed editing instruction, and writes the
/// first returned image to `output_dir` as `<stem>-processed<ext>`.
pub async fn run_edit(
    config: &EditorConfig,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchSummary, String> {
    ensure_dir(output_dir)?;

    let images = collect_input_images(input_dir)?;
    println!("Found {} images. Processing all of them.", images.len());

    let client = GeminiClient::new(&config.api_key, &config.endpoint, &config.model);
    let log_path = Path::new(GENERATION_LOG_FILE);

    let mut summary = BatchSummary::default();
    for input_path in images {
        let Some(file_name) = input_path.file_name().and_then(|name| name.to_str()) else {
            let reason = "file name is not valid UTF-8".to_string();
            eprintln!("Could not process {}: {}", input_path.display(), reason);
            summary.record_err(input_path, reason);
            continue;
        };
        let output_path = output_dir.join(processed_file_name(file_name));

        match edit_image(&client, &input_path, &output_path, log_path).await {
            Ok(()) => summary.record_ok(input_path),
            Err(reason) => {
                eprintln!("Could not process {}: {}", input_path.display(), reason);
                summary.record_err(input_path, reason);
            }
        }
    }

    Ok(summary)
}

/// One editing attempt: read, send, classify the response parts, save the
/// first image. Text parts are surfaced on the console since the service
/// occasionally narrates instead of editing; they are never written to disk.
async fn edit_image(
    client: &GeminiClient,
    input_path: &Path,
    output_path: &Path,
    log_path: &Path,
) -> Result<(), String> {
    println!("Processing image: {}", input_path.display());

    let bytes = fs::read(input_path)
        .await
        .map_err(|err| format!("could not read input file: {}", err))?;

    let parts = [
        PromptPart::text(EDIT_PROMPT),
        PromptPart::image_bytes(&bytes, detect_mime_type(input_path)),
    ];

    println!("Sending request to the Gemini image generation API...");
    let response = generate_content(client, &parts)
        .await
        .map_err(|err| format!("image generation request failed: {:#}", err))?;

    for text in response_texts(&response) {
        println!("Gemini returned text content: {}", text);
    }

    let Some(image) = first_image(&response) else {
        return Err("the response did not contain an image; nothing was saved".to_string());
    };

    let data = decode_inline_data(image)
        .map_err(|err| format!("could not decode the returned image: {:#}", err))?;

    fs::write(output_path, &data)
        .await
        .map_err(|err| format!("unable to persist processed image: {}", err))?;
    println!("Saved processed image to: {}", output_path.display());

    let entry = GenerationLogEntry {
        timestamp: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        source_image: input_path.display().to_string(),
        output_image: output_path.display().to_string(),
        model: client.model().to_string(),
    };
    if let Err(err) = append_generation_log(log_path, entry).await {
        eprintln!("Warning: could not update the generation log: {}", err);
    }

    Ok(())
}

const MAX_LOG_ENTRIES: usize = 50;

/// One line of run history, kept outside `output/` so the output directory
/// only ever holds processed images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationLogEntry {
    pub timestamp: u64,
    pub source_image: String,
    pub output_image: String,
    pub model: String,
}

pub(crate) async fn append_generation_log(
    path: &Path,
    entry: GenerationLogEntry,
) -> Result<(), String> {
    let mut entries: Vec<GenerationLogEntry> = if try_exists(path)
        .await
        .map_err(|err| format!("Failed to check log file: {}", err))?
    {
        let contents = fs::read_to_string(path)
            .await
            .unwrap_or_else(|_| "[]".to_string());
        serde_json::from_str(&contents).unwrap_or_default()
    } else {
        Vec::new()
    };

    entries.push(entry);
    if entries.len() > MAX_LOG_ENTRIES {
        entries = entries.split_off(entries.len() - MAX_LOG_ENTRIES);
    }

    let payload = serde_json::to_string_pretty(&entries)
        .map_err(|err| format!("Unable to serialise generation logs: {}", err))?;

    fs::write(path, payload)
        .await
        .map_err(|err| format!("Failed to write generation log: {}", err))
}
