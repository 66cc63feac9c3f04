//! Model service configuration and prompts

/// Endpoint and model configuration for the vision/chat service.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Base URL of the generative API
    pub api_base: String,
    /// API key appended to each request
    pub api_key: String,
    /// Model used for analysis and chat
    pub text_model: String,
    /// Model used for stylized image generation
    pub image_model: String,
}

impl ServiceConfig {
    /// Create a config with the default endpoints and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
            api_key: api_key.into(),
            text_model: "gemini-3-flash-preview".into(),
            image_model: "gemini-2.5-flash-image".into(),
        }
    }

    /// Full generateContent URL for a model.
    pub fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, model, self.api_key
        )
    }
}

/// Prompt sent with every analysis photo.
pub const ANALYSIS_PROMPT: &str = "\
Analyze this image. If it is a plant, return a JSON object with these fields:
- name: Common name of the plant
- scientificName: Scientific Latin name
- careInstructions: Provide detailed care instructions (approx 80-100 words) \
covering light, water, soil type, humidity, and temperature requirements. Be \
specific and helpful.
- confidence: Number between 0 and 1

If it is NOT a plant, set confidence to 0 and name to \"Unknown Object\".
Do not include markdown code blocks. Just the raw JSON.";

/// System context for the floating assistant.
pub const ASSISTANT_CONTEXT: &str = "\
You are the Verdant assistant, the AI interface for this application.

APP CAPABILITIES:
1. Scan: users tap the camera icon to identify plants instantly.
2. Upload: users can upload existing photos for analysis.
3. Analysis: you provide common name, scientific name, and care protocols \
(light, water, soil).
4. Generative art: the app renders a stylized visualization of the scanned \
plant.
5. Access: users can start a free trial (guest mode) or log in for full \
access.

YOUR ROLE:
- Guide users on how to use the app.
- Answer general botanical questions.
- Be helpful, concise, and friendly.

Keep responses under 50 words unless asked for detail.";

/// Prompt template for the stylized render.
pub fn artwork_prompt(plant_name: &str) -> String {
    format!(
        "Cinematic, 4k, realistic, botanical square image of a {} in a \
futuristic garden setting, neon lights, highly detailed.",
        plant_name
    )
}
