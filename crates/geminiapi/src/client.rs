use crate::utils::encode_bytes_to_base64;

/// Connection settings for one Gemini model. Constructed once by the caller
/// and passed into every request; this crate holds no global state.
#[derive(Clone)]
pub struct GeminiClient {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// One element of the user prompt sent to `generateContent`.
#[derive(Clone, Debug)]
pub enum PromptPart {
    Text(String),
    InlineImage { data_b64: String, mime_type: String },
}

impl PromptPart {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPart::Text(text.into())
    }

    pub fn image_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        PromptPart::InlineImage {
            data_b64: encode_bytes_to_base64(bytes),
            mime_type: mime_type.into(),
        }
    }
}
