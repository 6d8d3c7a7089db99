use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::warn;

use crate::opentargets::{AssociationPage, Transport, fetch_associations};

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(AssociationPage),
}

/// Runs the association query once on a worker thread and exposes its
/// progress as a [`LoadState`]. The UI calls [`DataLoader::poll`] every
/// frame and rebuilds its view when it reports a transition.
pub struct DataLoader {
    state: LoadState,
    rx: Option<Receiver<Result<AssociationPage, String>>>,
}

impl DataLoader {
    pub fn spawn<T: Transport>(transport: T) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetch_associations(&transport).map_err(|error| error.to_string());
            let _ = tx.send(result);
        });

        Self {
            state: LoadState::Loading,
            rx: Some(rx),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        self.rx.is_none()
    }

    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.rx.take() else {
            return false;
        };

        self.state = match rx.try_recv() {
            Ok(Ok(page)) => LoadState::Ready(page),
            Ok(Err(error)) => LoadState::Error(error),
            Err(TryRecvError::Empty) => {
                self.rx = Some(rx);
                return false;
            }
            Err(TryRecvError::Disconnected) => {
                warn!("association worker exited without a result");
                LoadState::Error("Background load worker disconnected".to_owned())
            }
        };
        true
    }
}
