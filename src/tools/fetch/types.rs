use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Body and status of one GET, plus the lease on its connection.
///
/// The lease is released when the result is dropped, so holding the result
/// for the whole parse keeps the accounting honest on every exit path.
#[derive(Debug)]
pub struct FetchResult {
    pub status: u16,
    pub body: Vec<u8>,
    /// `Content-Encoding` as delivered; `None` once the client has decoded it.
    pub content_encoding: Option<String>,
    pub content_type: Option<String>,
    /// URL after redirects.
    pub final_url: String,
    pub duration_ms: u64,
    pub lease: ConnectionLease,
}

impl FetchResult {
    /// Body as text; invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Gauge of responses a fetcher currently has open.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lease(&self) -> ConnectionLease {
        self.0.fetch_add(1, Ordering::SeqCst);
        ConnectionLease {
            gauge: Some(Arc::clone(&self.0)),
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// RAII handle counted on an [`InFlight`] gauge until dropped.
#[derive(Debug)]
pub struct ConnectionLease {
    gauge: Option<Arc<AtomicUsize>>,
}

impl ConnectionLease {
    /// A lease not tied to any gauge.
    pub fn detached() -> Self {
        Self { gauge: None }
    }
}

impl Drop for ConnectionLease {
    fn drop(&mut self) {
        if let Some(gauge) = self.gauge.take() {
            gauge.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
