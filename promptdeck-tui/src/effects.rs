//! Carries out page effects: sink delivery and busy-reset timers

use std::time::Duration;

use promptdeck_core::{Effect, SubmitSink};
use tokio::sync::mpsc::UnboundedSender;

pub struct EffectRunner {
    sink: Box<dyn SubmitSink>,
    /// Receives the generation of each fired busy reset
    busy_tx: UnboundedSender<u64>,
}

impl EffectRunner {
    pub fn new(sink: Box<dyn SubmitSink>, busy_tx: UnboundedSender<u64>) -> Self {
        Self { sink, busy_tx }
    }

    /// Must be called from within a tokio runtime (timers are spawned tasks)
    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit(prompt) => {
                    if let Err(err) = self.sink.submit(&prompt) {
                        tracing::warn!(error = %err, "submission sink failed");
                    }
                }
                Effect::ScheduleBusyReset { generation, after } => {
                    self.schedule_reset(generation, after);
                }
            }
        }
    }

    fn schedule_reset(&self, generation: u64, after: Duration) {
        let tx = self.busy_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver is gone only when the UI has shut down
            let _ = tx.send(generation);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdeck_core::{PromptDeckError, Result};
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<String>>>);

    impl SubmitSink for RecordingSink {
        fn submit(&self, prompt: &str) -> Result<()> {
            self.0.lock().unwrap().push(prompt.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmitSink for FailingSink {
        fn submit(&self, _prompt: &str) -> Result<()> {
            Err(PromptDeckError::config("sink offline"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_goes_to_sink_once() {
        let sink = RecordingSink::default();
        let (tx, _rx) = unbounded_channel();
        let runner = EffectRunner::new(Box::new(sink.clone()), tx);

        runner.run(vec![Effect::Submit("  exact  ".into())]);

        assert_eq!(*sink.0.lock().unwrap(), vec!["  exact  ".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_fires_after_delay() {
        let (tx, mut rx) = unbounded_channel();
        let runner = EffectRunner::new(Box::new(RecordingSink::default()), tx);
        let start = Instant::now();

        runner.run(vec![Effect::ScheduleBusyReset {
            generation: 7,
            after: Duration::from_millis(300),
        }]);

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(7));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(310));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_resets_both_fire() {
        let (tx, mut rx) = unbounded_channel();
        let runner = EffectRunner::new(Box::new(RecordingSink::default()), tx);

        runner.run(vec![Effect::ScheduleBusyReset {
            generation: 1,
            after: Duration::from_millis(300),
        }]);
        tokio::time::sleep(Duration::from_millis(100)).await;
        runner.run(vec![Effect::ScheduleBusyReset {
            generation: 2,
            after: Duration::from_millis(300),
        }]);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn test_sink_failure_is_swallowed() {
        let (tx, _rx) = unbounded_channel();
        let runner = EffectRunner::new(Box::new(FailingSink), tx);
        runner.run(vec![Effect::Submit("x".into())]);
    }
}
