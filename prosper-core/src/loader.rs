//! Loads the Google Maps JavaScript API at most once per page session.

use std::mem;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::gateways::ScriptGateway;

pub const SCRIPT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";
pub const SCRIPT_LIBRARIES: &str = "places";
pub const SCRIPT_VERSION: &str = "weekly";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Ready,
    Failed(LoadError),
}

impl LoadState {
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Google Maps API key is missing. Please check your .env.local file.")]
    MissingConfiguration,
    #[error("Failed to load Google Maps API ({0}). Please check your API key.")]
    NetworkLoadFailure(String),
    #[error("Google Places is not available after loading the Google Maps API.")]
    CapabilityUnavailable,
}

/// What happened to the injected script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnOnce(&LoadState)>;

pub fn script_url(api_key: &str) -> String {
    let key = utf8_percent_encode(api_key, NON_ALPHANUMERIC);
    format!("{SCRIPT_BASE_URL}?key={key}&libraries={SCRIPT_LIBRARIES}&v={SCRIPT_VERSION}")
}

/// Owns the [`LoadState`] of the mapping script.
///
/// Create one loader when the app is mounted and call [`ScriptLoader::teardown`]
/// when it is unmounted.
pub struct ScriptLoader<G> {
    gateway: G,
    state: LoadState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
    injected: bool,
    torn_down: bool,
}

impl<G> std::fmt::Debug for ScriptLoader<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptLoader")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("injected", &self.injected)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<G> ScriptLoader<G>
where
    G: ScriptGateway,
{
    pub const fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: LoadState::NotStarted,
            subscribers: Vec::new(),
            next_subscription: 0,
            injected: false,
            torn_down: false,
        }
    }

    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Start loading the script.
    ///
    /// Only the first call has an effect, every further call
    /// just returns the current state.
    pub fn load(&mut self, api_key: Option<&str>) -> &LoadState {
        if self.torn_down {
            log::debug!("Loader has been torn down: ignore load request");
            return &self.state;
        }
        if self.state != LoadState::NotStarted {
            log::debug!("Google Maps API load already requested ({:?})", self.state);
            return &self.state;
        }
        let Some(api_key) = api_key.map(str::trim).filter(|key| !key.is_empty()) else {
            log::error!("No Google Maps API key found");
            self.finish(LoadState::Failed(LoadError::MissingConfiguration));
            return &self.state;
        };
        if self.gateway.capability_available() {
            log::info!("Google Places already loaded");
            self.finish(LoadState::Ready);
            return &self.state;
        }
        log::debug!("Inject Google Maps API script");
        match self.gateway.inject(&script_url(api_key)) {
            Ok(()) => {
                self.injected = true;
                self.state = LoadState::Loading;
            }
            Err(err) => {
                log::error!("Unable to inject Google Maps API script: {err}");
                self.finish(LoadState::Failed(LoadError::NetworkLoadFailure(
                    err.to_string(),
                )));
            }
        }
        &self.state
    }

    /// Report the outcome of the injected script.
    ///
    /// Events that arrive while not loading are ignored.
    pub fn settle(&mut self, event: ScriptEvent) {
        if self.torn_down || self.state != LoadState::Loading {
            log::debug!("Ignore script event {event:?} in state {:?}", self.state);
            return;
        }
        let state = match event {
            ScriptEvent::Loaded => {
                if self.gateway.capability_available() {
                    log::info!("Google Places script loaded");
                    LoadState::Ready
                } else {
                    log::error!("Google Places not available after script load");
                    LoadState::Failed(LoadError::CapabilityUnavailable)
                }
            }
            ScriptEvent::Failed(reason) => {
                log::error!("Error loading Google Places script: {reason}");
                LoadState::Failed(LoadError::NetworkLoadFailure(reason))
            }
        };
        self.finish(state);
    }

    /// The subscriber is called exactly once with the settled state:
    /// immediately if the loader has already settled.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnOnce(&LoadState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        if self.state.is_settled() {
            subscriber(&self.state);
        } else if !self.torn_down {
            self.subscribers.push((id, Box::new(subscriber)));
        }
        id
    }

    /// Returns `false` if the subscriber has already been notified or removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < count
    }

    /// Remove the injected script and drop all pending subscribers.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!("Cleaning up Google Places script");
        self.torn_down = true;
        self.subscribers.clear();
        if self.injected {
            self.gateway.remove();
            self.injected = false;
        }
    }

    fn finish(&mut self, state: LoadState) {
        debug_assert!(state.is_settled());
        self.state = state;
        for (_, subscriber) in mem::take(&mut self.subscribers) {
            subscriber(&self.state);
        }
    }
}
