use std::time::Duration;

use flume::Sender;
use tokio::{task::JoinHandle, time::Instant};

use crate::event::events::Event;

/// Cosmetic elapsed-time counter shown in the player bar.
///
/// Nothing is actually playing, so the counter advances toward a fixed
/// nominal length regardless of the track's real duration.
#[derive(Debug, Clone)]
pub struct SimulatedProgress {
    elapsed: Duration,
    total: Duration,
    generation: u64,
}

impl SimulatedProgress {
    pub fn new(total: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            total,
            generation: 0,
        }
    }

    pub fn get_progress(&self) -> (Duration, Duration) {
        (self.elapsed, self.total)
    }

    /// Completed share in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.total.as_secs_f64()).min(1.0)
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total
    }

    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    /// Zeroes the counter and invalidates ticks from any earlier timer.
    pub fn reset(&mut self) -> u64 {
        self.generation += 1;
        self.elapsed = Duration::ZERO;
        self.generation
    }

    /// Applies one tick if it belongs to the current generation.
    /// Returns `false` for stale ticks.
    pub fn tick(&mut self, generation: u64, step: Duration) -> bool {
        if generation != self.generation {
            return false;
        }
        self.elapsed = (self.elapsed + step).min(self.total);
        true
    }

    /// Ticks left before the counter clamps at the nominal length.
    pub fn remaining_ticks(&self, step: Duration) -> u64 {
        if step.is_zero() {
            return 0;
        }
        let remaining = self.total.saturating_sub(self.elapsed).as_millis();
        remaining.div_ceil(step.as_millis()) as u64
    }
}

/// Spawns the timer that drives [`SimulatedProgress`]. It sends `ticks`
/// ticks one `period` apart, then a final `ProgressFinished`, and exits.
pub fn spawn_ticker(
    event_tx: Sender<Event>,
    generation: u64,
    period: Duration,
    ticks: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        for _ in 0..ticks {
            interval.tick().await;
            if event_tx
                .send_async(Event::ProgressTick(generation))
                .await
                .is_err()
            {
                return;
            }
        }
        let _ = event_tx
            .send_async(Event::ProgressFinished(generation))
            .await;
    })
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_clamp_at_total() {
        let mut progress = SimulatedProgress::new(Duration::from_secs(3));
        let generation = progress.reset();
        let step = Duration::from_secs(2);

        assert_eq!(progress.remaining_ticks(step), 2);
        assert!(progress.tick(generation, step));
        assert!(!progress.is_finished());
        assert!(progress.tick(generation, step));
        assert!(progress.is_finished());
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.remaining_ticks(step), 0);
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let mut progress = SimulatedProgress::new(Duration::from_secs(180));
        let old = progress.reset();
        let new = progress.reset();
        assert_ne!(old, new);

        assert!(!progress.tick(old, Duration::from_secs(1)));
        assert_eq!(progress.get_progress().0, Duration::ZERO);
        assert!(progress.tick(new, Duration::from_secs(1)));
        assert_eq!(progress.get_progress().0, Duration::from_secs(1));
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(67)), "1:07");
        assert_eq!(format_elapsed(Duration::from_secs(180)), "3:00");
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_sends_ticks_then_finishes() {
        let (tx, rx) = flume::unbounded();
        let handle = spawn_ticker(tx, 7, Duration::from_secs(1), 3);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(rx.drain().collect::<Vec<_>>(), vec![Event::ProgressTick(7); 2]);

        handle.await.unwrap();
        assert_eq!(
            rx.drain().collect::<Vec<_>>(),
            [Event::ProgressTick(7), Event::ProgressFinished(7)]
        );
    }
}
