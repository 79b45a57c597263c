//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use timeflow_core::{EventStore, SchedulingService, SuggestionProvider};
use timeflow_domain::{Config, Result};
use timeflow_infra::{GenAiClient, HttpClient, IdentityClient};
use tokio::sync::{Mutex, RwLock};

use crate::seed::demo_events;
use crate::session::SheetSession;

/// Application context - holds all services and shared state.
///
/// The event store has a single in-process owner behind a lock; the sheet
/// session serializes suggestion triggers. State lives for one process and is
/// reseeded on restart.
pub struct AppContext {
    pub config: Config,
    pub store: RwLock<EventStore>,
    pub scheduling: SchedulingService,
    pub identity: IdentityClient,
    pub session: Mutex<SheetSession>,
}

impl AppContext {
    /// Wire the production adapters from configuration and seed the store
    /// with the demo schedule.
    pub fn new(config: Config) -> Result<Arc<Self>> {
        // One user action, at most one in-flight request; a failed suggestion
        // call is never retried automatically.
        let assistant_http = HttpClient::builder()
            .timeout(Duration::from_secs(config.assistant.timeout_seconds))
            .max_attempts(1)
            .build()?;

        let mut provider = GenAiClient::new(config.assistant.api_key.clone(), assistant_http)
            .with_model(config.assistant.model.clone());
        if let Some(url) = &config.assistant.api_url {
            provider = provider.with_api_url(url.clone());
        }
        let scheduling = SchedulingService::new(Arc::new(provider));

        // Sign-up and login are not idempotent; leave retries to the user.
        let identity_http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .max_attempts(1)
            .build()?;
        let identity = IdentityClient::new(
            config.auth.provider_url.clone(),
            config.auth.api_key.clone(),
            identity_http,
        );

        let store = EventStore::with_events(demo_events(Utc::now()));

        Ok(Arc::new(Self {
            config,
            store: RwLock::new(store),
            scheduling,
            identity,
            session: Mutex::new(SheetSession::new()),
        }))
    }

    /// Assemble a context from pre-built services. Used by tests to inject a
    /// stub provider or a mock-backed identity client.
    pub fn with_services(
        config: Config,
        store: EventStore,
        provider: Arc<dyn SuggestionProvider>,
        identity: IdentityClient,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            store: RwLock::new(store),
            scheduling: SchedulingService::new(provider),
            identity,
            session: Mutex::new(SheetSession::new()),
        })
    }
}
