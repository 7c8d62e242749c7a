use std::fmt;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::constants::MIN_PRIZES_ERROR;
use crate::palette::{color_for_index, default_prizes};
use crate::prize::Prize;

/// Fewest entries a wheel may have.
pub const MIN_PRIZES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum PrizeListError {
    EmptyText,
    MinimumPrizes { min: usize },
    NotFound(String),
    TooFewPrizes { got: usize },
    SpinInProgress,
}

impl fmt::Display for PrizeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "选项内容不能为空"),
            Self::MinimumPrizes { .. } => write!(f, "{}", MIN_PRIZES_ERROR),
            Self::NotFound(id) => write!(f, "prize {} not found", id),
            Self::TooFewPrizes { got } => write!(f, "需要至少{}个选项，但只得到{}个", MIN_PRIZES, got),
            Self::SpinInProgress => write!(f, "转盘旋转中，请稍后再修改"),
        }
    }
}

impl std::error::Error for PrizeListError {}

/// Ordered, caller-editable list of prizes. Order is segment order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeList {
    prizes: Vec<Prize>,
}

impl Default for PrizeList {
    fn default() -> Self {
        Self { prizes: default_prizes() }
    }
}

impl PrizeList {
    pub fn from_prizes(prizes: Vec<Prize>) -> Result<Self, PrizeListError> {
        if prizes.len() < MIN_PRIZES {
            return Err(PrizeListError::TooFewPrizes { got: prizes.len() });
        }
        Ok(Self { prizes })
    }

    pub fn as_slice(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prize> {
        self.prizes.iter()
    }

    /// Appends a prize colored by the current list length.
    pub fn add(&mut self, text: &str) -> Result<&Prize, PrizeListError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PrizeListError::EmptyText);
        }
        let color = color_for_index(self.prizes.len());
        self.prizes.push(Prize::new(text, color));
        Ok(&self.prizes[self.prizes.len() - 1])
    }

    /// Removes by id. Refused when only `MIN_PRIZES` remain.
    pub fn remove(&mut self, id: &str) -> Result<Prize, PrizeListError> {
        if self.prizes.len() <= MIN_PRIZES {
            return Err(PrizeListError::MinimumPrizes { min: MIN_PRIZES });
        }
        let position = self
            .prizes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PrizeListError::NotFound(id.to_string()))?;
        Ok(self.prizes.remove(position))
    }

    /// Swaps in a freshly generated list. Blank texts are skipped; if fewer
    /// than `MIN_PRIZES` remain the current list is kept.
    pub fn replace_with_texts<I, S>(&mut self, texts: I) -> Result<(), PrizeListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = Uuid::new_v4().simple().to_string();
        let prizes: Vec<Prize> = texts
            .into_iter()
            .filter_map(|t| {
                let t = t.as_ref().trim();
                (!t.is_empty()).then(|| t.to_string())
            })
            .enumerate()
            .map(|(i, text)| Prize::with_id(format!("ai-{}-{}", batch, i), text, color_for_index(i)))
            .collect();

        if prizes.len() < MIN_PRIZES {
            return Err(PrizeListError::TooFewPrizes { got: prizes.len() });
        }
        self.prizes = prizes;
        Ok(())
    }
}
