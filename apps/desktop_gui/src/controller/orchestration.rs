//! Intent orchestration from widgets to the application context.

use catalog_core::AppContext;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::protocol::Intent;

use crate::controller::events::UiError;

pub fn queue_intent(intent_tx: &Sender<Intent>, intent: Intent, status: &mut Option<UiError>) {
    let intent_name = intent.name();

    match intent_tx.try_send(intent) {
        Ok(()) => tracing::debug!(intent = intent_name, "queued ui intent"),
        Err(TrySendError::Full(_)) => {
            *status = Some(UiError::queue_full());
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(UiError::queue_disconnected());
        }
    }
}

/// Applies every queued intent in arrival order and returns how many were applied.
pub fn drain_intents(
    intent_rx: &Receiver<Intent>,
    context: &mut AppContext,
    status: &mut Option<UiError>,
) -> usize {
    let mut applied = 0;
    while let Ok(intent) = intent_rx.try_recv() {
        match context.dispatch(intent) {
            Ok(_) => applied += 1,
            Err(err) => {
                let ui_err = UiError::from_catalog_error(&err);
                tracing::warn!(context = ?ui_err.context(), "{}", ui_err.message());
                *status = Some(ui_err);
            }
        }
    }
    applied
}
