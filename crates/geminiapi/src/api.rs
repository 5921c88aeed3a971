use anyhow::{Context, Result};
use base64::Engine as _;
use reqwest::Client;
use serde_json::{Value, json};

use crate::client::{GeminiClient, PromptPart};
use crate::models::{GeminiResponse, InlineData, PartKind};

pub fn convert_prompt_parts(parts: &[PromptPart]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => json!({ "text": text }),
            PromptPart::InlineImage { data_b64, mime_type } => json!({
                "inlineData": {
                    "mimeType": mime_type,
                    "data": data_b64
                }
            }),
        })
        .collect()
}

pub fn build_request_body(parts: &[PromptPart]) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": convert_prompt_parts(parts)
        }]
    })
}

/// One `generateContent` call. No retry and no timeout override; transport
/// errors and non-success statuses surface to the caller.
pub async fn generate_content(
    api_client: &GeminiClient,
    parts: &[PromptPart],
) -> Result<GeminiResponse> {
    let endpoint = api_client.endpoint().trim_end_matches('/');
    let url = format!("{}/{}:generateContent", endpoint, api_client.model());

    let body = build_request_body(parts);

    let client = Client::new();
    let response_text = client
        .post(url)
        .header("x-goog-api-key", api_client.api_key())
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .context("HTTP request failed")?
        .error_for_status()
        .context("Non-success status returned")?
        .text()
        .await
        .context("Reading response body failed")?;

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode Gemini response JSON. Raw response: {}",
            response_text
        )
    })?;

    Ok(response)
}

/// First non-empty inline image across all candidates, in response order.
pub fn first_image(response: &GeminiResponse) -> Option<&InlineData> {
    response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.content.parts.iter())
        .find_map(|part| match part.kind() {
            PartKind::Image(inline_data) => Some(inline_data),
            _ => None,
        })
}

/// Every non-empty text part across all candidates, in response order.
pub fn response_texts(response: &GeminiResponse) -> Vec<&str> {
    response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.content.parts.iter())
        .filter_map(|part| match part.kind() {
            PartKind::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}

pub fn decode_inline_data(inline_data: &InlineData) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(inline_data.data.trim())
        .context("Base64 decoding failed")
}
