use std::fmt;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::draw::draw_winner;
use crate::easing::{CubicBezier, SPIN_EASE};
use crate::geometry::{final_rotation, random_jitter};
use crate::prize::Prize;
use crate::weights::compute_weights;

/// Length of one spin animation in milliseconds.
pub const SPIN_DURATION_MS: f64 = 8000.0;

/// Everything fixed at the moment a spin is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: Prize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub jitter: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning {
        outcome: SpinOutcome,
        started_at_ms: f64,
    },
}

/// Accumulated rotation plus the spin phase. `rotation` only changes when a
/// spin finishes and is never wrapped into `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub rotation: f64,
    pub phase: SpinPhase,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            phase: SpinPhase::Idle,
        }
    }
}

/// What the renderer should show for a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinFrame {
    Idle { rotation: f64 },
    Spinning { rotation: f64, progress: f64 },
    Finished { rotation: f64, winner: Prize },
}

impl SpinFrame {
    pub fn rotation(&self) -> f64 {
        match self {
            SpinFrame::Idle { rotation }
            | SpinFrame::Spinning { rotation, .. }
            | SpinFrame::Finished { rotation, .. } => *rotation,
        }
    }
}

type SpinEndCallback = Box<dyn FnMut(&Prize)>;

/// Idle -> Spinning -> Idle. A spin request while Spinning is ignored;
/// there is no cancellation. Time is supplied by the caller through
/// `tick`, so the engine runs the same under a browser frame loop or a test.
pub struct SpinEngine {
    state: EngineState,
    duration_ms: f64,
    easing: CubicBezier,
    on_spin_end: Option<SpinEndCallback>,
}

impl fmt::Debug for SpinEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinEngine")
            .field("state", &self.state)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("on_spin_end", &self.on_spin_end.is_some())
            .finish()
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::with_state(EngineState::default())
    }

    pub fn with_state(state: EngineState) -> Self {
        Self {
            state,
            duration_ms: SPIN_DURATION_MS,
            easing: SPIN_EASE,
            on_spin_end: None,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Persisted rotation, i.e. where the wheel rested after the last spin.
    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state.phase, SpinPhase::Spinning { .. })
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn set_on_spin_end<F>(&mut self, callback: F)
    where
        F: FnMut(&Prize) + 'static,
    {
        self.on_spin_end = Some(Box::new(callback));
    }

    pub fn spin(&mut self, prizes: &[Prize], now_ms: f64) -> Option<SpinOutcome> {
        self.spin_with_rng(prizes, now_ms, &mut rand::thread_rng())
    }

    /// Accepts a spin if Idle: draws the winner, fixes the target rotation
    /// and enters Spinning. Returns `None` when rejected.
    pub fn spin_with_rng<R: Rng + ?Sized>(
        &mut self,
        prizes: &[Prize],
        now_ms: f64,
        rng: &mut R,
    ) -> Option<SpinOutcome> {
        if self.is_spinning() {
            log::debug!("spin ignored: already spinning");
            return None;
        }

        let weights = compute_weights(prizes);
        let winner_index = match draw_winner(&weights, rng) {
            Some(index) => index,
            None => {
                log::warn!("spin ignored: empty prize list");
                return None;
            }
        };

        let count = prizes.len();
        let jitter = random_jitter(count, rng);
        let start_rotation = self.state.rotation;
        let target_rotation = final_rotation(start_rotation, winner_index, count, jitter);

        let outcome = SpinOutcome {
            winner_index,
            winner: prizes[winner_index].clone(),
            start_rotation,
            target_rotation,
            jitter,
        };

        log::debug!(
            "spin accepted: winner {} ({}) of {}, rotation {:.2} -> {:.2}",
            winner_index,
            outcome.winner.text,
            count,
            start_rotation,
            target_rotation
        );

        self.state.phase = SpinPhase::Spinning {
            outcome: outcome.clone(),
            started_at_ms: now_ms,
        };
        Some(outcome)
    }

    /// Advances the animation clock. The first tick at or past the spin
    /// duration persists the target rotation, returns to Idle and fires the
    /// completion callback. Later ticks report Idle.
    pub fn tick(&mut self, now_ms: f64) -> SpinFrame {
        let (progress, start, target) = match &self.state.phase {
            SpinPhase::Idle => {
                return SpinFrame::Idle { rotation: self.state.rotation };
            }
            SpinPhase::Spinning { outcome, started_at_ms } => {
                let elapsed = (now_ms - started_at_ms).max(0.0);
                (
                    elapsed / self.duration_ms,
                    outcome.start_rotation,
                    outcome.target_rotation,
                )
            }
        };

        if progress < 1.0 {
            let rotation = start + (target - start) * self.easing.ease(progress);
            return SpinFrame::Spinning { rotation, progress };
        }

        let SpinPhase::Spinning { outcome, .. } = std::mem::replace(&mut self.state.phase, SpinPhase::Idle) else {
            return SpinFrame::Idle { rotation: self.state.rotation };
        };
        self.state.rotation = outcome.target_rotation;

        log::info!("spin finished: {}", outcome.winner.text);
        if let Some(callback) = self.on_spin_end.as_mut() {
            callback(&outcome.winner);
        }

        SpinFrame::Finished {
            rotation: outcome.target_rotation,
            winner: outcome.winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::winner_at_rotation;
    use crate::palette::default_prizes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run_to_end(engine: &mut SpinEngine, started: f64) -> SpinFrame {
        engine.tick(started + SPIN_DURATION_MS)
    }

    #[test]
    fn test_spin_completes_once_with_listed_prize() {
        let prizes = default_prizes();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut engine = SpinEngine::new();
        {
            let seen = seen.clone();
            engine.set_on_spin_end(move |p| seen.borrow_mut().push(p.clone()));
        }

        let mut rng = StdRng::seed_from_u64(10);
        let outcome = engine.spin_with_rng(&prizes, 0.0, &mut rng).unwrap();
        assert!(engine.is_spinning());

        for t in [1000.0, 4000.0, 7999.0] {
            assert!(matches!(engine.tick(t), SpinFrame::Spinning { .. }));
        }
        assert!(seen.borrow().is_empty());

        match run_to_end(&mut engine, 0.0) {
            SpinFrame::Finished { rotation, winner } => {
                assert_eq!(rotation, outcome.target_rotation);
                assert_eq!(winner, outcome.winner);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
        assert!(matches!(engine.tick(9000.0), SpinFrame::Idle { .. }));
        assert!(matches!(engine.tick(20000.0), SpinFrame::Idle { .. }));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(prizes.contains(&seen[0]));
        assert_eq!(seen[0], prizes[outcome.winner_index]);
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let prizes = default_prizes();
        let count = Rc::new(RefCell::new(0));
        let mut engine = SpinEngine::new();
        {
            let count = count.clone();
            engine.set_on_spin_end(move |_| *count.borrow_mut() += 1);
        }

        let mut rng = StdRng::seed_from_u64(3);
        let first = engine.spin_with_rng(&prizes, 0.0, &mut rng).unwrap();
        assert!(engine.spin_with_rng(&prizes, 100.0, &mut rng).is_none());
        assert!(engine.spin_with_rng(&prizes[..2], 5000.0, &mut rng).is_none());

        match &engine.state().phase {
            SpinPhase::Spinning { outcome, started_at_ms } => {
                assert_eq!(outcome, &first);
                assert_eq!(*started_at_ms, 0.0);
            }
            SpinPhase::Idle => panic!("should still be spinning"),
        }

        run_to_end(&mut engine, 0.0);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(engine.rotation(), first.target_rotation);
    }

    #[test]
    fn test_rotation_strictly_increases_across_spins() {
        let prizes = default_prizes();
        let mut engine = SpinEngine::new();
        let mut rng = StdRng::seed_from_u64(21);
        let mut previous = engine.rotation();
        let mut now = 0.0;

        for _ in 0..25 {
            let outcome = engine.spin_with_rng(&prizes, now, &mut rng).unwrap();
            assert_eq!(outcome.start_rotation, previous);
            // Rotation is only persisted at the end of the animation
            engine.tick(now + SPIN_DURATION_MS / 2.0);
            assert_eq!(engine.rotation(), previous);

            now += SPIN_DURATION_MS;
            engine.tick(now);
            assert!(engine.rotation() > previous);
            assert_eq!(winner_at_rotation(engine.rotation(), prizes.len()), outcome.winner_index);
            previous = engine.rotation();
            now += 1.0;
        }
    }

    #[test]
    fn test_animation_is_forward_and_ends_on_target() {
        let prizes = default_prizes();
        let mut engine = SpinEngine::with_state(EngineState {
            rotation: 1234.5,
            phase: SpinPhase::Idle,
        });
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = engine.spin_with_rng(&prizes, 500.0, &mut rng).unwrap();
        assert_eq!(outcome.start_rotation, 1234.5);

        let mut last = outcome.start_rotation;
        for step in 0..=80 {
            let frame = engine.tick(500.0 + step as f64 * 100.0);
            let rotation = frame.rotation();
            assert!(rotation >= last - 1e-9);
            assert!(rotation <= outcome.target_rotation + 1e-9);
            last = rotation;
        }
        assert_eq!(last, outcome.target_rotation);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_two_prizes_always_resolve() {
        let prizes = vec![
            Prize::with_id("a", "好运一", "#000"),
            Prize::with_id("b", "好运二", "#fff"),
        ];
        let mut engine = SpinEngine::new();
        let mut rng = StdRng::seed_from_u64(4);
        for i in 0..20 {
            let start = i as f64 * 10_000.0;
            let outcome = engine.spin_with_rng(&prizes, start, &mut rng).unwrap();
            assert!(outcome.winner_index < 2);
            assert!(matches!(run_to_end(&mut engine, start), SpinFrame::Finished { .. }));
        }
    }

    #[test]
    fn test_empty_list_rejected_and_engine_stays_idle() {
        let mut engine = SpinEngine::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine.spin_with_rng(&[], 0.0, &mut rng).is_none());
        assert!(!engine.is_spinning());
        assert_eq!(engine.tick(10.0), SpinFrame::Idle { rotation: 0.0 });
    }
}
