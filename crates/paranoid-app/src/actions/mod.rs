//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use paranoid_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::UpdateAction;

pub(super) mod export;
pub(super) mod files;
pub mod timer;

pub use timer::{run_progress_timer, spawn_progress_timer};

/// Holder for the running progress timer task, if any
pub type AnalysisTaskSlot = Arc<std::sync::Mutex<Option<JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    analysis_task: &AnalysisTaskSlot,
) {
    match action {
        UpdateAction::StartAnalysisTimer { run_id, schedule } => {
            let handle = spawn_progress_timer(run_id, schedule, msg_tx);
            if let Ok(mut slot) = analysis_task.lock() {
                if let Some(previous) = slot.replace(handle) {
                    previous.abort();
                }
            }
        }

        UpdateAction::CancelAnalysisTimer { run_id } => {
            if abort_analysis_task(analysis_task) {
                debug!("Aborted progress timer of run {}", run_id);
            }
        }

        UpdateAction::LoadContractFile { path } => {
            tokio::spawn(files::load_contract_file(path, msg_tx));
        }

        UpdateAction::ExportReport { result } => {
            tokio::spawn(export::export_report(result, msg_tx));
        }
    }
}

/// Send `msg` back to the event loop
pub(crate) async fn send_message(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}

/// Abort the running timer task. Returns true if one was held.
pub fn abort_analysis_task(analysis_task: &AnalysisTaskSlot) -> bool {
    match analysis_task.lock().ok().and_then(|mut slot| slot.take()) {
        Some(handle) => {
            handle.abort();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressSchedule;
    use std::time::Duration;

    fn slot() -> AnalysisTaskSlot {
        Arc::new(std::sync::Mutex::new(None))
    }

    #[tokio::test]
    async fn test_send_message_to_closed_loop_fails() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let err = send_message(&tx, Message::Tick).await.unwrap_err();
        assert!(matches!(err, Error::ChannelSend { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_timer_fills_slot() {
        let (tx, _rx) = mpsc::channel(16);
        let tasks = slot();

        handle_action(
            UpdateAction::StartAnalysisTimer {
                run_id: 1,
                schedule: ProgressSchedule::default(),
            },
            tx,
            &tasks,
        );

        assert!(tasks.lock().unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_timer() {
        let (tx, mut rx) = mpsc::channel(16);
        let tasks = slot();

        handle_action(
            UpdateAction::StartAnalysisTimer {
                run_id: 7,
                schedule: ProgressSchedule::default(),
            },
            tx.clone(),
            &tasks,
        );
        handle_action(UpdateAction::CancelAnalysisTimer { run_id: 7 }, tx, &tasks);
        assert!(tasks.lock().unwrap().is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_aborts_previous_timer() {
        let (tx, mut rx) = mpsc::channel(64);
        let tasks = slot();
        let schedule = ProgressSchedule::default();

        handle_action(
            UpdateAction::StartAnalysisTimer {
                run_id: 1,
                schedule,
            },
            tx.clone(),
            &tasks,
        );
        handle_action(
            UpdateAction::StartAnalysisTimer {
                run_id: 2,
                schedule,
            },
            tx,
            &tasks,
        );

        tokio::time::sleep(Duration::from_secs(10)).await;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                Message::AnalysisStep { run_id, .. } | Message::AnalysisTimerElapsed { run_id } => {
                    assert_eq!(run_id, 2)
                }
                other => panic!("unexpected message {:?}", other),
            }
        }
    }

    #[test]
    fn test_abort_empty_slot() {
        assert!(!abort_analysis_task(&slot()));
    }
}
