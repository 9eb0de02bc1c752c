use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, error, info, warn};

use super::source::ProjectSource;
use super::{normalize, LoadError, LoadState, Project, TransportError};

/// One activation: fetch once, check status, normalize
pub async fn load_projects<S>(source: &S) -> Result<Vec<Project>, LoadError>
where
    S: ProjectSource + ?Sized,
{
    let document = source.fetch().await?;
    if !document.is_success() {
        return Err(TransportError::Status {
            status: document.status,
            reason: document.reason,
        }
        .into());
    }
    Ok(normalize(&document.body)?)
}

/// Drives `load_projects` on a tokio runtime for a UI that polls every frame
///
/// The fetch result arrives over a oneshot channel. Dropping the loader drops
/// the receiver, so a response that lands afterwards is discarded.
pub struct ProjectLoader {
    source: Arc<dyn ProjectSource>,
    runtime: Handle,
    state: LoadState,
    pending: Option<oneshot::Receiver<LoadState>>,
    attempts: u32,
}

impl ProjectLoader {
    pub fn new(source: Arc<dyn ProjectSource>, runtime: Handle) -> Self {
        Self {
            source,
            runtime,
            state: LoadState::Loading,
            pending: None,
            attempts: 0,
        }
    }

    /// Enter `Loading` and start a fetch. No-op while one is in flight.
    pub fn activate(&mut self) {
        if self.pending.is_some() {
            debug!("project fetch already in flight");
            return;
        }

        self.attempts += 1;
        self.state = LoadState::Loading;
        let attempt = self.attempts;
        let source = Arc::clone(&self.source);
        let (tx, rx) = oneshot::channel();

        self.runtime.spawn(async move {
            let state = LoadState::from(load_projects(source.as_ref()).await);
            if tx.send(state).is_err() {
                debug!(attempt, "project loader gone before the response arrived, discarding");
            }
        });
        self.pending = Some(rx);
        info!(attempt, "Project fetch started");
    }

    /// Start over after an error, without restarting the application
    pub fn retry(&mut self) {
        info!("Retrying project fetch");
        self.activate();
    }

    /// Pick up a finished fetch, if any, and return the current state
    pub fn poll(&mut self) -> &LoadState {
        if let Some(rx) = self.pending.as_mut() {
            match rx.try_recv() {
                Ok(state) => {
                    match &state {
                        LoadState::Ready(projects) => info!(count = projects.len(), "Projects loaded"),
                        LoadState::Error(message) => warn!(error = %message, "Error fetching projects"),
                        LoadState::Loading => {}
                    }
                    self.state = state;
                    self.pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    error!("project fetch task ended without a result");
                    self.state = LoadState::Error("An unexpected error occurred".to_string());
                    self.pending = None;
                }
            }
        }
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::source::{FetchedDocument, MockSource};
    use crate::projects::FormatError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    /// Source whose response lands only after `delay`
    struct SlowSource {
        delay: Duration,
        answered: AtomicBool,
    }

    #[async_trait]
    impl ProjectSource for SlowSource {
        async fn fetch(&self) -> Result<FetchedDocument, TransportError> {
            tokio::time::sleep(self.delay).await;
            self.answered.store(true, Ordering::SeqCst);
            Ok(FetchedDocument::ok(r#"[{"title":"A","description":"d","live":"l"}]"#))
        }
    }

    fn source_returning(document: FetchedDocument) -> MockSource {
        let mut source = MockSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(move || Ok(document.clone()));
        source
    }

    async fn settle(loader: &mut ProjectLoader) -> LoadState {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if !matches!(loader.poll(), LoadState::Loading) {
                    return loader.state().clone();
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("loader did not settle")
    }

    #[tokio::test]
    async fn test_ready_with_single_live_project() {
        let source = source_returning(FetchedDocument::ok(r#"[{"title":"A","description":"d1","live":"http://x"}]"#));
        let projects = load_projects(&source).await.unwrap();
        assert_eq!(
            projects,
            vec![Project {
                title: "A".to_string(),
                description: "d1".to_string(),
                link: "http://x".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_not_found_names_status() {
        let source = source_returning(FetchedDocument {
            status: 404,
            reason: "Not Found".to_string(),
            body: String::new(),
        });
        let err = load_projects(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(TransportError::Status { status: 404, .. })));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_network_failure_is_transport_error() {
        let mut source = MockSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(TransportError::Network("connection refused".to_string())));
        let err = load_projects(&source).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data: connection refused");
    }

    #[tokio::test]
    async fn test_non_array_body_is_format_error() {
        let source = source_returning(FetchedDocument::ok(r#"{"not":"an array"}"#));
        let err = load_projects(&source).await.unwrap_err();
        assert_eq!(err, LoadError::Format(FormatError::NotAnArray));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_loader_moves_from_loading_to_ready() {
        let source = source_returning(FetchedDocument::ok(r#"[{"title":"C","description":"d3","github":"g","live":"l"}]"#));
        let mut loader = ProjectLoader::new(Arc::new(source), Handle::current());
        assert_eq!(loader.state(), &LoadState::Loading);

        loader.activate();
        assert!(loader.is_pending());

        match settle(&mut loader).await {
            LoadState::Ready(projects) => assert_eq!(projects[0].link, "l"),
            other => panic!("unexpected state {other:?}"),
        }
        assert!(!loader.is_pending());
        assert_eq!(loader.attempts(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_retry_fetches_again() {
        let mut source = MockSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(FetchedDocument::ok(r#"[{"title":"B","description":"d2"}]"#)));
        source
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(FetchedDocument::ok(r#"[{"title":"B","description":"d2","github":"g"}]"#)));

        let mut loader = ProjectLoader::new(Arc::new(source), Handle::current());
        loader.activate();
        assert_eq!(
            settle(&mut loader).await,
            LoadState::Error("No valid projects found in the data".to_string())
        );

        loader.retry();
        assert_eq!(loader.state(), &LoadState::Loading);
        assert!(matches!(settle(&mut loader).await, LoadState::Ready(_)));
        assert_eq!(loader.attempts(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_activate_while_pending_is_single_request() {
        let source = source_returning(FetchedDocument::ok(r#"[{"title":"A","description":"d","live":"l"}]"#));
        let mut loader = ProjectLoader::new(Arc::new(source), Handle::current());
        loader.activate();
        loader.activate();
        settle(&mut loader).await;
        assert_eq!(loader.attempts(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_dropping_loader_mid_fetch_discards_result() {
        let source = Arc::new(SlowSource {
            delay: Duration::from_millis(50),
            answered: AtomicBool::new(false),
        });
        let mut loader = ProjectLoader::new(source.clone(), Handle::current());
        loader.activate();
        assert!(loader.is_pending());
        drop(loader);

        // The task holds the last other reference until its send has failed
        tokio::time::timeout(Duration::from_secs(5), async {
            while Arc::strong_count(&source) > 1 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("fetch task did not finish");
        assert!(source.answered.load(Ordering::SeqCst));
    }
}
