//! Background generation on tokio's blocking pool.
//!
//! The sampler itself is synchronous and may sleep between items, so it runs
//! under [`tokio::task::spawn_blocking`] and reports back over a channel. The
//! join handle is the completion signal; the [`CancelFlag`] only asks the
//! worker to stop.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::request::GenerationRequest;
use crate::sampler::{CancelFlag, GenerationResult, Observer, Password, generate_with};

/// Something the worker reports while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Item `index` of `count` is about to be produced.
    Progress { index: u32, count: u32 },
    /// Item `index` was produced.
    Item { index: u32, password: Password },
}

struct ChannelObserver {
    tx: UnboundedSender<Event>,
    cancel: CancelFlag,
}

impl Observer for ChannelObserver {
    fn progress(&mut self, index: u32, count: u32) {
        let _ = self.tx.send(Event::Progress { index, count });
    }

    fn item(&mut self, index: u32, password: &Password) {
        let _ = self.tx.send(Event::Item { index, password: password.clone() });
    }

    // Nobody left to render the output once the receiver is gone.
    fn is_cancelled(&mut self) -> bool {
        self.cancel.is_cancelled() || self.tx.is_closed()
    }
}

/// Starts generating `request` on a blocking worker.
///
/// Must be called from within a tokio runtime.
pub fn spawn(
    request: GenerationRequest,
    cancel: CancelFlag,
) -> (JoinHandle<GenerationResult>, UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::task::spawn_blocking(move || {
        let mut rng = SmallRng::from_entropy();
        let mut observer = ChannelObserver { tx, cancel };
        generate_with(&request, &mut rng, &mut observer)
    });
    (handle, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::validate;
    use crate::sampler::Status;

    #[tokio::test]
    async fn test_spawn_streams_items_then_completes() {
        let request = validate("AB", 3, 4, 0).unwrap();
        let (handle, mut rx) = spawn(request, CancelFlag::new());

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        let result = handle.await.unwrap();

        assert_eq!(result.status, Status::Completed);
        assert_eq!(result.passwords.len(), 4);
        assert_eq!(events.len(), 8);

        let items: Vec<Password> = events
            .into_iter()
            .filter_map(|e| match e {
                Event::Item { password, .. } => Some(password),
                Event::Progress { .. } => None,
            })
            .collect();
        assert_eq!(items, result.passwords);
    }

    #[tokio::test]
    async fn test_cancel_stops_worker() {
        let request = validate("AB", 3, 500, 500).unwrap();
        let cancel = CancelFlag::new();
        let (handle, mut rx) = spawn(request, cancel.clone());

        let mut produced = 0u32;
        while let Some(event) = rx.recv().await {
            if let Event::Item { index, .. } = event {
                produced = index;
                if index == 2 {
                    cancel.cancel();
                }
            }
        }
        let result = handle.await.unwrap();

        assert_eq!(result.status, Status::Cancelled);
        assert_eq!(produced, 2);
        assert_eq!(result.passwords.len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_receiver_cancels() {
        let request = validate("AB", 3, 500, 50).unwrap();
        let (handle, rx) = spawn(request, CancelFlag::new());
        drop(rx);

        let result = handle.await.unwrap();
        assert_eq!(result.status, Status::Cancelled);
    }
}
