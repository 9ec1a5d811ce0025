//! The ordered set of coins picked for comparison.

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on simultaneously compared coins.
pub const MAX_COMPARE_COINS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Maximum {} coins can be compared", MAX_COMPARE_COINS)]
    Full,
}

/// What a `toggle` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Selection order is preserved: it decides line colours and which coin's
/// timestamps label the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSelection {
    ids: Vec<CoinId>,
}

impl CoinSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if absent, deselect it if present.
    pub fn toggle(&mut self, id: CoinId) -> Result<Toggle, SelectionError> {
        if self.remove(&id) {
            return Ok(Toggle::Removed);
        }
        if self.is_full() {
            return Err(SelectionError::Full);
        }
        self.ids.push(id);
        Ok(Toggle::Added)
    }

    /// Returns whether `id` was selected.
    pub fn remove(&mut self, id: &CoinId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &CoinId) -> bool {
        self.ids.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE_COINS
    }

    pub fn ids(&self) -> &[CoinId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl TryFrom<Vec<CoinId>> for CoinSelection {
    type Error = SelectionError;

    /// Duplicates collapse onto their first occurrence.
    fn try_from(ids: Vec<CoinId>) -> Result<Self, Self::Error> {
        let mut selection = Self::new();
        for id in ids {
            if !selection.contains(&id) {
                if selection.is_full() {
                    return Err(SelectionError::Full);
                }
                selection.ids.push(id);
            }
        }
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = CoinSelection::new();
        assert_eq!(sel.toggle("bitcoin".into()).unwrap(), Toggle::Added);
        assert!(sel.contains(&"bitcoin".into()));
        assert_eq!(sel.toggle("bitcoin".into()).unwrap(), Toggle::Removed);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_sixth_coin_rejected() {
        let mut sel = CoinSelection::new();
        for i in 0..MAX_COMPARE_COINS {
            sel.toggle(CoinId::new(format!("c{i}"))).unwrap();
        }
        assert_eq!(sel.toggle("extra".into()), Err(SelectionError::Full));
        assert_eq!(sel.len(), MAX_COMPARE_COINS);
        // deselecting still works when full
        assert_eq!(sel.toggle("c0".into()).unwrap(), Toggle::Removed);
    }

    #[test]
    fn test_order_preserved() {
        let mut sel = CoinSelection::new();
        for id in ["eth", "btc", "sol"] {
            sel.toggle(id.into()).unwrap();
        }
        sel.remove(&"btc".into());
        let ids: Vec<_> = sel.ids().iter().map(CoinId::as_str).collect();
        assert_eq!(ids, ["eth", "sol"]);
    }

    #[test]
    fn test_try_from_dedupes() {
        let sel = CoinSelection::try_from(vec!["a".into(), "b".into(), "a".into()]).unwrap();
        assert_eq!(sel.len(), 2);
        let too_many: Vec<CoinId> = (0..6).map(|i| CoinId::new(format!("c{i}"))).collect();
        assert!(CoinSelection::try_from(too_many).is_err());
    }
}
