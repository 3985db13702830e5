//! Staff profile photos.
//!
//! [`PhotoLoader`] is the per-component state machine; [`use_profile_photo`]
//! drives it from the reactive runtime and owns the resulting object URL.

use client::ApiClient;
use dioxus::prelude::*;

use crate::object_url::{create_object_url, revoke_object_url};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PhotoStatus {
    /// No identifier, nothing to load.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The directory has no photo for this user. Not an error.
    NotFound,
    Failed(String),
}

/// Result of one photo fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoOutcome {
    /// Object URL created for the fetched image.
    Loaded(String),
    NotFound,
    Failed(String),
}

impl PhotoOutcome {
    /// The object URL this outcome carries, if any.
    pub fn into_url(self) -> Option<String> {
        match self {
            PhotoOutcome::Loaded(url) => Some(url),
            _ => None,
        }
    }
}

/// Permission to run one fetch for one identifier value.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    id: String,
    seq: u64,
}

impl FetchTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// What the caller must do after [`PhotoLoader::begin`].
#[derive(Debug, Default, PartialEq)]
pub struct BeginFetch {
    /// Start a fetch with this ticket.
    pub ticket: Option<FetchTicket>,
    /// Revoke this URL; it belonged to the previous identifier.
    pub release: Option<String>,
}

#[derive(Debug, Default)]
pub struct PhotoLoader {
    current_id: Option<String>,
    seq: u64,
    status: PhotoStatus,
    url: Option<String>,
}

impl PhotoLoader {
    pub fn status(&self) -> &PhotoStatus {
        &self.status
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Observe the identifier. A new value resets all state and grants
    /// exactly one fetch; seeing the same value again grants nothing.
    pub fn begin(&mut self, id: Option<&str>) -> BeginFetch {
        let id = id.map(str::trim).filter(|s| !s.is_empty());
        if self.seq > 0 && self.current_id.as_deref() == id {
            return BeginFetch::default();
        }

        self.seq += 1;
        self.current_id = id.map(str::to_string);
        let release = self.url.take();

        let ticket = match id {
            Some(id) => {
                self.status = PhotoStatus::Loading;
                Some(FetchTicket {
                    id: id.to_string(),
                    seq: self.seq,
                })
            }
            None => {
                self.status = PhotoStatus::Idle;
                None
            }
        };
        BeginFetch { ticket, release }
    }

    /// Apply a fetch result. Returns a URL the caller must revoke: either the
    /// one being replaced or, for a stale ticket, the result's own URL.
    pub fn finish(&mut self, ticket: FetchTicket, outcome: PhotoOutcome) -> Option<String> {
        if ticket.seq != self.seq {
            return outcome.into_url();
        }
        match outcome {
            PhotoOutcome::Loaded(url) => {
                self.status = PhotoStatus::Loaded;
                self.url.replace(url)
            }
            PhotoOutcome::NotFound => {
                self.status = PhotoStatus::NotFound;
                None
            }
            PhotoOutcome::Failed(message) => {
                self.status = PhotoStatus::Failed(message);
                None
            }
        }
    }

    /// Component is going away: invalidate in-flight tickets and hand back
    /// the live URL for revocation.
    pub fn teardown(&mut self) -> Option<String> {
        self.seq += 1;
        self.current_id = None;
        self.status = PhotoStatus::Idle;
        self.url.take()
    }

    pub fn snapshot(&self) -> ProfilePhoto {
        ProfilePhoto {
            url: self.url.clone(),
            status: self.status.clone(),
        }
    }
}

/// What a component renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfilePhoto {
    pub url: Option<String>,
    pub status: PhotoStatus,
}

impl ProfilePhoto {
    pub fn is_loading(&self) -> bool {
        self.status == PhotoStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PhotoStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Value for the `data-state` attribute of the rendered picture.
    pub fn state_name(&self) -> &'static str {
        match self.status {
            PhotoStatus::Idle => "idle",
            PhotoStatus::Loading => "loading",
            PhotoStatus::Loaded => "loaded",
            PhotoStatus::NotFound => "missing",
            PhotoStatus::Failed(_) => "error",
        }
    }
}

async fn fetch_photo(api: &ApiClient, directory_id: &str) -> PhotoOutcome {
    match api.fetch_staff_photo(directory_id).await {
        Ok(Some(blob)) => match create_object_url(&blob).await {
            Ok(url) => PhotoOutcome::Loaded(url),
            Err(e) => {
                tracing::error!(directory_id, error = %e, "Failed to create photo URL");
                PhotoOutcome::Failed(e.friendly_message())
            }
        },
        Ok(None) => {
            tracing::debug!(directory_id, "No profile photo");
            PhotoOutcome::NotFound
        }
        Err(e) => {
            tracing::error!(directory_id, error = %e, "Failed to fetch profile photo");
            PhotoOutcome::Failed(e.friendly_message())
        }
    }
}

/// Load the staff photo for `directory_id` once per identifier value.
pub fn use_profile_photo(directory_id: Option<String>) -> Memo<ProfilePhoto> {
    let api = use_context::<ApiClient>();
    let mut loader = use_signal(PhotoLoader::default);

    use_effect(use_reactive!(|directory_id| {
        let BeginFetch { ticket, release } = loader.write().begin(directory_id.as_deref());
        if let Some(url) = release {
            revoke_object_url(&url);
        }
        if let Some(ticket) = ticket {
            let api = api.clone();
            // Outlives the component so a URL created mid-unmount still gets revoked.
            spawn_forever(async move {
                let outcome = fetch_photo(&api, ticket.id()).await;
                let release = match loader.try_write() {
                    Ok(mut state) => state.finish(ticket, outcome),
                    Err(_) => outcome.into_url(),
                };
                if let Some(url) = release {
                    revoke_object_url(&url);
                }
            });
        }
    }));

    use_drop(move || {
        if let Ok(mut state) = loader.try_write() {
            if let Some(url) = state.teardown() {
                revoke_object_url(&url);
            }
        }
    });

    use_memo(move || loader.read().snapshot())
}
