//! Progress timer task for the simulated analysis

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::message::Message;
use crate::progress::{ProgressSchedule, STEP_COUNT};

/// Spawn the timer for run `run_id`. Abort the handle to cancel it.
pub fn spawn_progress_timer(
    run_id: u64,
    schedule: ProgressSchedule,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(run_progress_timer(run_id, schedule, msg_tx))
}

/// Emit one `AnalysisStep` per `step_interval`, then `AnalysisTimerElapsed`
/// once the total duration has passed.
///
/// Stops early if the receiver is dropped.
pub async fn run_progress_timer(
    run_id: u64,
    schedule: ProgressSchedule,
    msg_tx: mpsc::Sender<Message>,
) {
    for step in 0..STEP_COUNT {
        tokio::time::sleep(schedule.step_interval).await;
        if msg_tx
            .send(Message::AnalysisStep { run_id, step })
            .await
            .is_err()
        {
            debug!("Progress timer of run {} stopped: channel closed", run_id);
            return;
        }
    }

    tokio::time::sleep(schedule.settle_delay()).await;
    let _ = msg_tx.send(Message::AnalysisTimerElapsed { run_id }).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Paused time advances to timer deadlines, which are millisecond-rounded
    fn assert_near(actual: Duration, expected: Duration) {
        assert!(
            actual >= expected && actual <= expected + Duration::from_millis(10),
            "elapsed {:?}, expected {:?}",
            actual,
            expected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_six_steps_then_elapsed() {
        let (tx, mut rx) = mpsc::channel(16);
        let start = Instant::now();
        spawn_progress_timer(3, ProgressSchedule::default(), tx);

        for expected in 0..STEP_COUNT {
            match rx.recv().await {
                Some(Message::AnalysisStep { run_id, step }) => {
                    assert_eq!(run_id, 3);
                    assert_eq!(step, expected);
                }
                other => panic!("expected step {}, got {:?}", expected, other),
            }
            assert_near(start.elapsed(), Duration::from_millis(500) * (expected as u32 + 1));
        }

        assert_eq!(
            rx.recv().await,
            Some(Message::AnalysisTimerElapsed { run_id: 3 })
        );
        assert_near(start.elapsed(), Duration::from_millis(3000));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_delay_before_elapsed() {
        let (tx, mut rx) = mpsc::channel(16);
        let start = Instant::now();
        let schedule =
            ProgressSchedule::new(Duration::from_millis(100), Duration::from_millis(1000));
        spawn_progress_timer(1, schedule, tx);

        let mut steps = 0;
        while let Some(msg) = rx.recv().await {
            match msg {
                Message::AnalysisStep { .. } => steps += 1,
                Message::AnalysisTimerElapsed { .. } => break,
                other => panic!("unexpected {:?}", other),
            }
        }

        assert_eq!(steps, STEP_COUNT);
        assert_near(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let handle = spawn_progress_timer(1, ProgressSchedule::default(), tx);
        handle.await.unwrap();
    }
}
