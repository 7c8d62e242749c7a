use rand::Rng;

use crate::engine::{SpinEngine, SpinFrame, SpinOutcome};
use crate::prize::Prize;
use crate::prize_list::{PrizeList, PrizeListError};

/// A prize list together with the engine that spins it. List edits are
/// refused while a spin is in flight so the segment count cannot change
/// under the animation.
#[derive(Debug, Default)]
pub struct Wheel {
    prizes: PrizeList,
    engine: SpinEngine,
}

impl Wheel {
    pub fn new(prizes: PrizeList) -> Self {
        Self {
            prizes,
            engine: SpinEngine::new(),
        }
    }

    pub fn with_engine(prizes: PrizeList, engine: SpinEngine) -> Self {
        Self { prizes, engine }
    }

    pub fn prizes(&self) -> &PrizeList {
        &self.prizes
    }

    pub fn engine(&self) -> &SpinEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SpinEngine {
        &mut self.engine
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    pub fn spin(&mut self, now_ms: f64) -> Option<SpinOutcome> {
        self.engine.spin(self.prizes.as_slice(), now_ms)
    }

    pub fn spin_with_rng<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<SpinOutcome> {
        self.engine.spin_with_rng(self.prizes.as_slice(), now_ms, rng)
    }

    pub fn tick(&mut self, now_ms: f64) -> SpinFrame {
        self.engine.tick(now_ms)
    }

    fn ensure_idle(&self) -> Result<(), PrizeListError> {
        if self.is_spinning() {
            return Err(PrizeListError::SpinInProgress);
        }
        Ok(())
    }

    pub fn add_prize(&mut self, text: &str) -> Result<Prize, PrizeListError> {
        self.ensure_idle()?;
        self.prizes.add(text).cloned()
    }

    pub fn remove_prize(&mut self, id: &str) -> Result<Prize, PrizeListError> {
        self.ensure_idle()?;
        self.prizes.remove(id)
    }

    pub fn replace_prizes<I, S>(&mut self, texts: I) -> Result<(), PrizeListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_idle()?;
        self.prizes.replace_with_texts(texts)
    }
}
