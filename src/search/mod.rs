//! Search orchestration
//!
//! The public entry point of the pipeline: cache check, credential and
//! model validation, prompt construction, the completion call, fail-soft
//! parsing, result capping, and the cache write on the success path.

use crate::cache::SearchCache;
use crate::client::OpenRouterClient;
use crate::config::Settings;
use crate::error::SearchError;
use crate::parser;
use crate::prompt;
use crate::query::SearchParams;
use crate::results::WordResult;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Anything that can turn search parameters into candidate words
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<Vec<WordResult>, SearchError>;
}

/// The model-backed search pipeline.
///
/// Holds the settings object, the result cache, and the remote client.
/// A search is a single logical thread of control; concurrent identical
/// searches are not de-duplicated and there is no cancellation.
pub struct WordSearch {
    settings: Settings,
    cache: SearchCache,
    base_url: String,
}

impl WordSearch {
    /// Create a pipeline over the given settings
    pub fn new(settings: Settings) -> Self {
        let cache = SearchCache::new(settings.cache_enabled());
        Self {
            settings,
            cache,
            base_url: crate::client::OPENROUTER_BASE.to_string(),
        }
    }

    /// Point the pipeline at a different provider base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one search through the pipeline.
    ///
    /// Validation and upstream failures propagate; an unparsable
    /// completion degrades to an empty result list. The cache only ever
    /// holds the already-capped list, so raising the result limit later
    /// does not reveal more entries for a cached query.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<WordResult>, SearchError> {
        if let Some(cached) = self.cache.lookup(params) {
            info!("Returning {} cached results", cached.len());
            return Ok(cached);
        }

        let api_key = self
            .settings
            .api_key()
            .ok_or(SearchError::MissingCredential)?;
        let model = self
            .settings
            .selected_model()
            .ok_or(SearchError::NoModelSelected)?
            .to_string();

        let client = OpenRouterClient::with_base_url(api_key, self.base_url.as_str())?;
        let user_prompt = prompt::build_user_prompt(params);
        debug!("Requesting completion for pattern {:?}", params.pattern());

        let raw = client
            .complete(&model, prompt::SYSTEM_PROMPT, &user_prompt)
            .await?;

        let results = match parser::parse_completion(&raw) {
            Ok(results) => results,
            Err(e) => {
                // A model occasionally emitting unparsable text is an
                // expected, recoverable condition
                warn!("Discarding unparsable completion: {}", e);
                Vec::new()
            }
        };

        let capped: Vec<WordResult> = results
            .into_iter()
            .take(self.settings.max_results())
            .collect();

        info!("Search returned {} results", capped.len());
        self.cache.store(params, &capped);
        Ok(capped)
    }

    /// Settings accessor
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Update the API key
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.settings.set_api_key(key);
    }

    /// Update the selected model
    pub fn set_selected_model(&mut self, model: impl Into<String>) {
        self.settings.set_selected_model(model);
    }

    /// Update the result cap
    pub fn set_max_results(&mut self, max: usize) {
        self.settings.set_max_results(max);
    }

    /// Enable or disable caching, keeping the cache in step with the
    /// persisted flag. Disabling drops every cached entry.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.settings.set_cache_enabled(enabled);
        self.cache.set_enabled(enabled);
    }

    /// Drop all cached results
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// List the models available to the stored credential
    pub async fn list_models(
        &self,
    ) -> Result<Vec<crate::client::ModelDescriptor>, SearchError> {
        let api_key = self
            .settings
            .api_key()
            .ok_or(SearchError::MissingCredential)?;
        OpenRouterClient::with_base_url(api_key, self.base_url.as_str())?
            .list_models()
            .await
    }

    #[cfg(test)]
    fn cache(&self) -> &SearchCache {
        &self.cache
    }
}

#[async_trait]
impl WordSource for WordSearch {
    async fn search(&self, params: &SearchParams) -> Result<Vec<WordResult>, SearchError> {
        WordSearch::search(self, params).await
    }
}
