use larder_core::ai::AiConfig;
use larder_core::{Controller, LlmError, LlmProvider, RecipeForm};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers
pub type SharedState = Arc<ServerState>;

/// Everything the page handlers need. Nothing here outlives the process.
pub struct ServerState {
    pub controller: Arc<Controller>,
    ai: AiConfig,
    /// Key entered in the settings panel; takes precedence over `GEMINI_API_KEY`.
    api_key: RwLock<Option<String>>,
    /// Last submitted form, so the page shows what the user typed.
    form: RwLock<RecipeForm>,
    provider_override: Option<Arc<dyn LlmProvider>>,
}

impl ServerState {
    pub fn new(ai: AiConfig) -> Self {
        Self {
            controller: Arc::new(Controller::new()),
            ai,
            api_key: RwLock::new(None),
            form: RwLock::new(RecipeForm::default()),
            provider_override: None,
        }
    }

    /// Use `provider` for every generation regardless of configuration.
    #[cfg(test)]
    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider_override: Some(provider),
            ..Self::new(AiConfig::default())
        }
    }

    pub async fn set_api_key(&self, key: Option<String>) {
        let key = key.filter(|k| !k.trim().is_empty());
        *self.api_key.write().await = key;
    }

    /// Whether the user has entered a key in the settings panel.
    pub async fn has_user_api_key(&self) -> bool {
        self.api_key.read().await.is_some()
    }

    /// Whether a submission would find a usable credential.
    pub async fn has_credential(&self) -> bool {
        if self.provider_override.is_some() {
            return true;
        }
        let key = self.api_key.read().await;
        self.ai.has_credential(key.as_deref())
    }

    pub async fn provider(&self) -> Result<Arc<dyn LlmProvider>, LlmError> {
        if let Some(provider) = &self.provider_override {
            return Ok(Arc::clone(provider));
        }
        let key = self.api_key.read().await;
        self.ai.build_provider(key.as_deref())
    }

    pub async fn form(&self) -> RecipeForm {
        self.form.read().await.clone()
    }

    pub async fn set_form(&self, form: RecipeForm) {
        *self.form.write().await = form;
    }
}
