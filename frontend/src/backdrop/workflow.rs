use async_trait::async_trait;
use log::{error, info};
use thiserror::Error;

use crate::config;

pub const IMAGE_PROMPT_PREFIX: &str = "A high-resolution, cinematic photograph of a photobooth backdrop. ";
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("service returned no text")]
    EmptyText,
    #[error("no image was generated")]
    NoImages,
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// User-facing failures of the backdrop demo. `Display` is what the page shows.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("Please enter an event theme.")]
    Validation,
    #[error("Failed to generate backdrop idea. Please try again.")]
    IdeaFailed(#[source] ServiceError),
    #[error("Failed to generate backdrop image. Please try again.")]
    ImageFailed(#[source] ServiceError),
    #[error("A backdrop is already being generated.")]
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRequest {
    pub model: &'static str,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub thinking_budget: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub model: &'static str,
    pub prompt: String,
    pub count: u32,
    pub mime_type: &'static str,
    pub aspect_ratio: &'static str,
}

/// Hosted text and image generation.
#[async_trait(?Send)]
pub trait BackdropService {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, ServiceError>;

    /// Base64 payloads, one per generated image.
    async fn generate_images(&self, request: &ImageRequest) -> Result<Vec<String>, ServiceError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropIdea(pub String);

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropImage {
    pub base64: String,
}

impl BackdropImage {
    pub fn data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, self.base64)
    }
}

/// Rejects whitespace-only themes. Accepted themes are passed on unchanged.
pub fn validate_theme(theme: &str) -> Result<&str, BackdropError> {
    if theme.trim().is_empty() {
        return Err(BackdropError::Validation);
    }
    Ok(theme)
}

pub fn idea_prompt(theme: &str) -> String {
    format!(
        "Generate a creative and highly detailed photobooth backdrop description for an event with the theme: \"{}\". \
         Focus on specific visual elements, colors, textures, props, and lighting to create an immersive atmosphere. \
         The description should be vivid and inspiring, suitable for an image generation AI. Output only the description.",
        theme
    )
}

pub fn image_prompt(idea: &BackdropIdea) -> String {
    format!("{}{}", IMAGE_PROMPT_PREFIX, idea.0)
}

pub fn idea_request(theme: &str) -> TextRequest {
    TextRequest {
        model: config::TEXT_MODEL,
        prompt: idea_prompt(theme),
        temperature: config::IDEA_TEMPERATURE,
        max_output_tokens: config::IDEA_MAX_OUTPUT_TOKENS,
        thinking_budget: config::IDEA_THINKING_BUDGET,
    }
}

pub fn image_request(idea: &BackdropIdea) -> ImageRequest {
    ImageRequest {
        model: config::IMAGE_MODEL,
        prompt: image_prompt(idea),
        count: config::IMAGE_COUNT,
        mime_type: config::IMAGE_MIME_TYPE,
        aspect_ratio: config::IMAGE_ASPECT_RATIO,
    }
}

pub async fn request_idea<S>(service: &S, theme: &str) -> Result<BackdropIdea, BackdropError>
where
    S: BackdropService + ?Sized,
{
    let text = service
        .generate_text(&idea_request(theme))
        .await
        .map_err(|err| {
            error!("Error generating backdrop idea: {}", err);
            BackdropError::IdeaFailed(err)
        })?;
    Ok(BackdropIdea(text))
}

pub async fn request_image<S>(service: &S, idea: &BackdropIdea) -> Result<BackdropImage, BackdropError>
where
    S: BackdropService + ?Sized,
{
    let images = service
        .generate_images(&image_request(idea))
        .await
        .map_err(|err| {
            error!("Error generating backdrop image: {}", err);
            BackdropError::ImageFailed(err)
        })?;

    match images.into_iter().next() {
        Some(base64) => Ok(BackdropImage { base64 }),
        None => {
            error!("Error generating backdrop image: {}", ServiceError::NoImages);
            Err(BackdropError::ImageFailed(ServiceError::NoImages))
        }
    }
}

/// Theme -> idea -> image. The image request is only issued once the idea
/// request has succeeded; `on_idea` fires in between.
pub async fn run<S, F>(service: &S, theme: &str, on_idea: F) -> Result<BackdropImage, BackdropError>
where
    S: BackdropService + ?Sized,
    F: FnOnce(&BackdropIdea),
{
    let theme = validate_theme(theme)?;

    info!("Generating backdrop idea for theme {:?}", theme);
    let idea = request_idea(service, theme).await?;
    on_idea(&idea);

    info!("Generating backdrop image");
    request_image(service, &idea).await
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BackdropPhase {
    #[default]
    Idle,
    GeneratingIdea,
    GeneratingImage,
    Done,
    Error,
}

/// Everything the demo section renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackdropState {
    pub theme: String,
    phase: BackdropPhase,
    idea: Option<String>,
    image_data_uri: Option<String>,
    error: Option<String>,
}

impl BackdropState {
    pub fn phase(&self) -> BackdropPhase {
        self.phase
    }

    pub fn idea(&self) -> Option<&str> {
        self.idea.as_deref()
    }

    pub fn image_data_uri(&self) -> Option<&str> {
        self.image_data_uri.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, BackdropPhase::GeneratingIdea | BackdropPhase::GeneratingImage)
    }

    pub fn set_theme(&mut self, theme: String) {
        self.theme = theme;
    }

    /// Validates the theme and starts a new generation, clearing the previous
    /// result. Returns the theme to send.
    pub fn begin(&mut self) -> Result<String, BackdropError> {
        if self.is_loading() {
            return Err(BackdropError::Busy);
        }

        let theme = match validate_theme(&self.theme) {
            Ok(theme) => theme.to_string(),
            Err(err) => {
                self.fail(&err);
                return Err(err);
            }
        };

        self.idea = None;
        self.image_data_uri = None;
        self.error = None;
        self.phase = BackdropPhase::GeneratingIdea;
        Ok(theme)
    }

    pub fn idea_ready(&mut self, idea: &BackdropIdea) {
        self.idea = Some(idea.0.clone());
        self.phase = BackdropPhase::GeneratingImage;
    }

    pub fn image_ready(&mut self, image: &BackdropImage) {
        self.image_data_uri = Some(image.data_uri());
        self.phase = BackdropPhase::Done;
    }

    pub fn fail(&mut self, err: &BackdropError) {
        self.error = Some(err.to_string());
        self.phase = BackdropPhase::Error;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Text(TextRequest),
        Images(ImageRequest),
    }

    struct ScriptedService {
        idea: Option<String>,
        images: Option<Vec<String>>,
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedService {
        fn new(idea: Option<&str>, images: Option<Vec<&str>>) -> Self {
            Self {
                idea: idea.map(str::to_string),
                images: images.map(|images| images.into_iter().map(str::to_string).collect()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl BackdropService for ScriptedService {
        async fn generate_text(&self, request: &TextRequest) -> Result<String, ServiceError> {
            self.calls.borrow_mut().push(Call::Text(request.clone()));
            self.idea.clone().ok_or(ServiceError::EmptyText)
        }

        async fn generate_images(&self, request: &ImageRequest) -> Result<Vec<String>, ServiceError> {
            self.calls.borrow_mut().push(Call::Images(request.clone()));
            self.images.clone().ok_or(ServiceError::Status {
                status: 500,
                body: "internal".to_string(),
            })
        }
    }

    #[test]
    fn test_blank_theme_makes_no_calls() {
        for theme in ["", "   ", "\t\n"] {
            let service = ScriptedService::new(Some("idea"), Some(vec!["img"]));
            let err = block_on(run(&service, theme, |_| {})).unwrap_err();
            assert_eq!(err.to_string(), "Please enter an event theme.");
            assert!(service.calls.borrow().is_empty());
        }
    }

    #[test]
    fn test_idea_is_requested_before_image() {
        let service = ScriptedService::new(Some("Glowing moss and lanterns"), Some(vec!["AAAA"]));
        block_on(run(&service, "enchanted forest wedding", |_| {})).unwrap();

        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 2);
        match (&calls[0], &calls[1]) {
            (Call::Text(text), Call::Images(image)) => {
                assert!(text.prompt.contains("\"enchanted forest wedding\""));
                assert!(image.prompt.contains("Glowing moss and lanterns"));
            }
            other => panic!("unexpected call order: {:?}", other),
        }
    }

    #[test]
    fn test_enchanted_forest_scenario() {
        let idea = "A canopy of silver birches draped in fairy lights.";
        let service = ScriptedService::new(Some(idea), Some(vec!["/9j/4AAQ", "ignored"]));
        let mut seen_idea = None;

        let image = block_on(run(&service, "enchanted forest wedding", |i| seen_idea = Some(i.clone()))).unwrap();

        assert_eq!(seen_idea, Some(BackdropIdea(idea.to_string())));
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,/9j/4AAQ");

        let calls = service.calls.borrow();
        let Call::Images(request) = &calls[1] else {
            panic!("second call was not an image request");
        };
        assert_eq!(
            request.prompt,
            format!("A high-resolution, cinematic photograph of a photobooth backdrop. {}", idea)
        );
        assert_eq!(request.count, 1);
        assert_eq!(request.mime_type, "image/jpeg");
        assert_eq!(request.aspect_ratio, "4:3");
    }

    #[test]
    fn test_theme_and_idea_are_sent_verbatim() {
        let idea = "  Neon grid floor with a chrome sunset.\n";
        let service = ScriptedService::new(Some(idea), Some(vec!["AAAA"]));
        let mut seen_idea = None;

        block_on(run(&service, " 80s retro arcade party ", |i| seen_idea = Some(i.clone()))).unwrap();

        assert_eq!(seen_idea, Some(BackdropIdea(idea.to_string())));
        let calls = service.calls.borrow();
        match (&calls[0], &calls[1]) {
            (Call::Text(text), Call::Images(image)) => {
                assert!(text.prompt.contains("theme: \" 80s retro arcade party \"."));
                assert_eq!(image.prompt, format!("{}{}", IMAGE_PROMPT_PREFIX, idea));
            }
            other => panic!("unexpected call order: {:?}", other),
        }
    }

    #[test]
    fn test_validate_theme_keeps_surrounding_whitespace() {
        assert_eq!(validate_theme(" gala ").unwrap(), " gala ");
        assert!(matches!(validate_theme(" \t "), Err(BackdropError::Validation)));
    }

    #[test]
    fn test_idea_request_parameters() {
        let request = idea_request("80s retro arcade party");
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.max_output_tokens, 200);
        assert_eq!(request.thinking_budget, 100);
        assert!(request.prompt.ends_with("Output only the description."));
    }

    #[test]
    fn test_idea_failure_skips_image() {
        let service = ScriptedService::new(None, Some(vec!["img"]));
        let mut idea_seen = false;
        let err = block_on(run(&service, "gala", |_| idea_seen = true)).unwrap_err();

        assert!(matches!(err, BackdropError::IdeaFailed(_)));
        assert_eq!(err.to_string(), "Failed to generate backdrop idea. Please try again.");
        assert!(!idea_seen);
        assert_eq!(service.calls.borrow().len(), 1);
    }

    #[test]
    fn test_zero_images_is_image_failure() {
        let service = ScriptedService::new(Some("idea"), Some(vec![]));
        let err = block_on(run(&service, "gala", |_| {})).unwrap_err();
        assert!(matches!(err, BackdropError::ImageFailed(ServiceError::NoImages)));
        assert_eq!(err.to_string(), "Failed to generate backdrop image. Please try again.");
    }

    #[test]
    fn test_image_service_error_is_image_failure() {
        let service = ScriptedService::new(Some("idea"), None);
        let err = block_on(run(&service, "gala", |_| {})).unwrap_err();
        assert!(matches!(err, BackdropError::ImageFailed(ServiceError::Status { status: 500, .. })));
    }

    #[test]
    fn test_state_happy_path() {
        let mut state = BackdropState::default();
        assert_eq!(state.phase(), BackdropPhase::Idle);

        state.set_theme("  enchanted forest wedding ".to_string());
        assert_eq!(state.begin().unwrap(), "  enchanted forest wedding ");
        assert!(state.is_loading());
        assert_eq!(state.phase(), BackdropPhase::GeneratingIdea);

        state.idea_ready(&BackdropIdea("moss".to_string()));
        assert_eq!(state.phase(), BackdropPhase::GeneratingImage);
        assert_eq!(state.idea(), Some("moss"));
        assert!(state.is_loading());

        state.image_ready(&BackdropImage { base64: "AAAA".to_string() });
        assert_eq!(state.phase(), BackdropPhase::Done);
        assert!(!state.is_loading());
        assert_eq!(state.image_data_uri(), Some("data:image/jpeg;base64,AAAA"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_state_validation_error() {
        let mut state = BackdropState::default();
        state.set_theme("   ".to_string());
        assert!(matches!(state.begin(), Err(BackdropError::Validation)));
        assert_eq!(state.phase(), BackdropPhase::Error);
        assert_eq!(state.error(), Some("Please enter an event theme."));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_state_is_single_flight() {
        let mut state = BackdropState::default();
        state.set_theme("gala".to_string());
        state.begin().unwrap();
        assert!(matches!(state.begin(), Err(BackdropError::Busy)));
        assert_eq!(state.phase(), BackdropPhase::GeneratingIdea);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_clears_loading_and_retry_resets() {
        let mut state = BackdropState::default();
        state.set_theme("gala".to_string());
        state.begin().unwrap();
        state.idea_ready(&BackdropIdea("idea".to_string()));
        state.fail(&BackdropError::ImageFailed(ServiceError::NoImages));

        assert!(!state.is_loading());
        assert_eq!(state.idea(), Some("idea"));
        assert_eq!(state.error(), Some("Failed to generate backdrop image. Please try again."));

        state.begin().unwrap();
        assert_eq!(state.idea(), None);
        assert_eq!(state.image_data_uri(), None);
        assert_eq!(state.error(), None);
    }
}
