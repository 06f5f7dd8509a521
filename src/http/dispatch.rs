use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::error::DispatchError;
use crate::event::Event;
use crate::model::{RequestDescriptor, ResponseDescriptor};
use super::backend::BackendClient;

/// Create the request on the backend, then execute it by the id the backend
/// assigned. Execute is never attempted when create fails.
pub async fn dispatch(
    backend: &BackendClient,
    descriptor: &RequestDescriptor,
) -> Result<ResponseDescriptor, DispatchError> {
    log::info!("create: {} {}", descriptor.method.as_str(), descriptor.url);
    let created = backend.create(descriptor).await?;

    log::info!("execute: request {}", created.id);
    let response = backend.execute(&created.id).await?;

    log::info!(
        "request {} -> {} ({} bytes, {}ms)",
        created.id,
        response.status_code,
        response.size,
        response.duration
    );
    Ok(response)
}

/// Tags every event a dispatch sends, so a late event from an earlier
/// dispatch can be told apart from the current one.
pub type DispatchId = u64;

/// Runs at most one dispatch at a time and reports its outcome as events.
pub struct Dispatcher {
    backend: Arc<BackendClient>,
    in_flight: Arc<AtomicBool>,
    next_id: AtomicU64,
    tx: UnboundedSender<Event>,
}

impl Dispatcher {
    pub fn new(backend: BackendClient, tx: UnboundedSender<Event>) -> Self {
        Self {
            backend: Arc::new(backend),
            in_flight: Arc::new(AtomicBool::new(false)),
            next_id: AtomicU64::new(1),
            tx,
        }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Spawn a dispatch for `descriptor` and return its id. Rejected with
    /// `Busy` while another one is still running.
    ///
    /// The task sends `Event::Response` when the sequence finishes and
    /// `Event::DispatchSettled` when its guard drops, which also happens if
    /// the task panics. Both carry the returned id.
    pub fn start(&self, descriptor: RequestDescriptor) -> Result<DispatchId, DispatchError> {
        let guard = self.acquire()?;
        let id = guard.id;
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let _guard = guard;
            let result = dispatch(&backend, &descriptor).await;
            if let Err(e) = &result {
                log::warn!("dispatch {id} failed: {e}");
            }
            let _ = tx.send(Event::Response(id, result));
        });
        Ok(id)
    }

    fn acquire(&self) -> Result<BusyGuard, DispatchError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                log::debug!("send rejected: dispatch already in flight");
                DispatchError::Busy
            })?;
        Ok(BusyGuard {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            in_flight: Arc::clone(&self.in_flight),
            tx: self.tx.clone(),
        })
    }
}

/// Holds the in-flight flag for one dispatch and releases it on every exit path.
struct BusyGuard {
    id: DispatchId,
    in_flight: Arc<AtomicBool>,
    tx: UnboundedSender<Event>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
        let _ = self.tx.send(Event::DispatchSettled(self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn dispatcher() -> (Dispatcher, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = BackendClient::new(
            reqwest::Client::new(),
            url::Url::parse("http://127.0.0.1:9").unwrap(),
        );
        (Dispatcher::new(backend, tx), rx)
    }

    #[test]
    fn guard_release_clears_flag_and_reports() {
        let (d, mut rx) = dispatcher();
        let guard = d.acquire().unwrap();
        assert!(d.is_busy());
        assert!(matches!(d.acquire(), Err(DispatchError::Busy)));

        let id = guard.id;
        drop(guard);
        assert!(!d.is_busy());
        assert!(matches!(rx.try_recv(), Ok(Event::DispatchSettled(settled)) if settled == id));

        let next = d.acquire().unwrap();
        assert!(next.id > id);
    }

    #[tokio::test]
    async fn panicking_holder_still_releases() {
        let (d, mut rx) = dispatcher();
        let guard = d.acquire().unwrap();
        let id = guard.id;
        let handle = tokio::spawn(async move {
            let _guard = guard;
            panic!("boom");
        });
        assert!(handle.await.is_err());
        assert!(!d.is_busy());
        assert!(matches!(rx.recv().await, Some(Event::DispatchSettled(settled)) if settled == id));
    }
}
