use crate::utils::error::{Result, SiteError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Snapshot view over one fetched resource.
///
/// The channel is seeded with the fallback; the loader task publishes exactly
/// one value (the parsed payload, or the fallback again on any failure).
/// `current` never blocks, so a section whose fetch has not settled simply
/// renders from the fallback. Dropping the handle detaches the task rather
/// than aborting it, matching the no-cancellation model of the page.
pub struct ContentHandle<T> {
    rx: watch::Receiver<T>,
    task: Option<JoinHandle<()>>,
}

impl<T: Clone> ContentHandle<T> {
    /// Latest published value.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Waits for the fetch to settle and returns the settled value.
    /// Idempotent: after the first call this returns immediately.
    pub async fn settled(&mut self) -> T {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.current()
    }

    /// Wraps an already-resolved value. No fetch is issued.
    pub fn fixed(value: T) -> Self {
        let (_tx, rx) = watch::channel(value);
        Self { rx, task: None }
    }
}

/// Fetches JSON resources by reference. One fetch per `load` call, no
/// retries, and no error propagation: the caller always gets a usable value.
pub struct ResourceLoader {
    client: Client,
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Issues one asynchronous fetch of `url` and publishes the parsed value.
    /// Network errors, non-success statuses and parse errors all collapse to
    /// the fallback; the failure kind is logged but never exposed.
    pub fn load<T>(&self, url: &str, fallback: T) -> ContentHandle<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(fallback.clone());
        let client = self.client.clone();
        let url = url.to_string();

        let task = tokio::spawn(async move {
            match fetch_json::<T>(&client, &url).await {
                Ok(value) => {
                    tracing::debug!("Loaded content from {}", url);
                    let _ = tx.send(value);
                }
                Err(e) => {
                    tracing::debug!("Content load failed for {}: {} (using fallback)", url, e);
                    let _ = tx.send(fallback);
                }
            }
        });

        ContentHandle {
            rx,
            task: Some(task),
        }
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SiteError::StatusError {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice::<T>(&bytes)?)
}
