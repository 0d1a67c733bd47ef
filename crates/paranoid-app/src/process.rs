//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::{handle_action, AnalysisTaskSlot};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call; actions are handed to
/// [`handle_action`] as they are produced.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    analysis_task: &AnalysisTaskSlot,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), analysis_task);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
