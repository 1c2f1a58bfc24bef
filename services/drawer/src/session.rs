//! Drawing session state
//!
//! Owns the number pool, the drawn set and the number currently on display.
//! The drawn set only grows between resets and never holds a number outside
//! the pool.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::errors::ServiceError;
use shared::{DrawRecord, NumberRange, SessionSummary, DISPLAY_RESET_NUMBER, MAX_DISPLAYABLE_NUMBER};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DrawSession {
    session_id: Uuid,
    range: NumberRange,
    pool: Vec<u32>,
    drawn: BTreeSet<u32>,
    history: Vec<DrawRecord>,
    displayed: u32,
}

impl DrawSession {
    pub fn new(range: NumberRange) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            range,
            pool: range.to_pool(),
            drawn: BTreeSet::new(),
            history: Vec::new(),
            displayed: DISPLAY_RESET_NUMBER,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn range(&self) -> NumberRange {
        self.range
    }

    pub fn pool(&self) -> &[u32] {
        &self.pool
    }

    /// Pool members not drawn yet, ascending
    pub fn available(&self) -> Vec<u32> {
        self.pool
            .iter()
            .copied()
            .filter(|n| !self.drawn.contains(n))
            .collect()
    }

    pub fn is_drawn(&self, number: u32) -> bool {
        self.drawn.contains(&number)
    }

    pub fn drawn(&self) -> &BTreeSet<u32> {
        &self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.pool.len() - self.drawn.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Pool members too wide for the two-digit display
    pub fn undisplayable(&self) -> usize {
        self.pool
            .iter()
            .filter(|&&n| n > MAX_DISPLAYABLE_NUMBER)
            .count()
    }

    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn set_displayed(&mut self, number: u32) {
        self.displayed = number;
    }

    /// Pick a not-yet-drawn number uniformly at random. Does not mark it drawn.
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u32, ServiceError> {
        self.available()
            .choose(rng)
            .copied()
            .ok_or_else(|| ServiceError::pool_exhausted(self.pool.len()))
    }

    /// Commit a draw. Returns `false` if the number was already drawn.
    pub fn mark_drawn(&mut self, number: u32, steps: usize) -> Result<bool, ServiceError> {
        if !self.range.contains(number) {
            return Err(ServiceError::number_not_in_pool(number));
        }
        if !self.drawn.insert(number) {
            return Ok(false);
        }

        self.history.push(DrawRecord {
            sequence: self.history.len() as u32 + 1,
            number,
            drawn_at: Utc::now(),
            steps,
        });
        self.displayed = number;
        Ok(true)
    }

    /// Forget every draw and show the reset number again
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.history.clear();
        self.displayed = DISPLAY_RESET_NUMBER;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.session_id,
            range: self.range,
            drawn: self.drawn.iter().copied().collect(),
            remaining: self.remaining(),
            draws: self.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::errors::ErrorCategory;

    #[test]
    fn test_new_session_has_full_pool() {
        let session = DrawSession::new(NumberRange::new(1, 75));
        assert_eq!(session.pool().len(), 75);
        assert_eq!(session.available().len(), 75);
        assert_eq!(session.remaining(), 75);
        assert_eq!(session.displayed(), 0);
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_choose_target_never_returns_drawn_number() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = DrawSession::new(NumberRange::new(1, 10));
        for n in 1..=9 {
            session.mark_drawn(n, 0).unwrap();
        }
        for _ in 0..20 {
            assert_eq!(session.choose_target(&mut rng).unwrap(), 10);
        }
    }

    #[test]
    fn test_mark_drawn_rejects_duplicates_and_outsiders() {
        let mut session = DrawSession::new(NumberRange::new(1, 10));
        assert!(session.mark_drawn(4, 12).unwrap());
        assert!(!session.mark_drawn(4, 12).unwrap());
        assert_eq!(session.drawn().len(), 1);
        assert_eq!(session.history().len(), 1);

        let error = session.mark_drawn(11, 0).unwrap_err();
        assert_eq!(error.category, ErrorCategory::NotFound);
        assert_eq!(session.drawn().len(), 1);
    }

    #[test]
    fn test_mark_drawn_records_history_and_display() {
        let mut session = DrawSession::new(NumberRange::new(1, 10));
        session.mark_drawn(7, 30).unwrap();
        session.mark_drawn(2, 28).unwrap();

        let history = session.history();
        assert_eq!(history[0].sequence, 1);
        assert_eq!(history[0].number, 7);
        assert_eq!(history[0].steps, 30);
        assert_eq!(history[1].sequence, 2);
        assert_eq!(session.displayed(), 2);
    }

    #[test]
    fn test_exhausted_pool_reports_and_keeps_state() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = DrawSession::new(NumberRange::new(1, 3));
        for n in 1..=3 {
            session.mark_drawn(n, 0).unwrap();
        }

        let error = session.choose_target(&mut rng).unwrap_err();
        assert_eq!(error.category, ErrorCategory::Exhausted);
        assert!(session.is_exhausted());
        assert_eq!(session.drawn().len(), 3);
    }

    #[test]
    fn test_empty_range_is_exhausted_from_the_start() {
        let session = DrawSession::new(NumberRange::new(5, 1));
        assert!(session.is_exhausted());
        assert!(session.choose_target(&mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_undisplayable_counts_numbers_above_99() {
        assert_eq!(DrawSession::new(NumberRange::new(1, 99)).undisplayable(), 0);
        assert_eq!(DrawSession::new(NumberRange::new(1, 110)).undisplayable(), 11);
        assert_eq!(DrawSession::new(NumberRange::empty()).undisplayable(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = DrawSession::new(NumberRange::new(1, 10));
        session.mark_drawn(3, 10).unwrap();
        session.mark_drawn(9, 10).unwrap();

        session.reset();

        assert!(session.drawn().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.displayed(), 0);
        assert_eq!(session.available().len(), 10);
    }

    #[test]
    fn test_summary_serializes() {
        let mut session = DrawSession::new(NumberRange::new(1, 10));
        session.mark_drawn(8, 5).unwrap();
        session.mark_drawn(1, 5).unwrap();

        let summary = session.summary();
        assert_eq!(summary.drawn, vec![1, 8]);
        assert_eq!(summary.remaining, 8);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["session_id"], session.session_id().to_string());
        assert_eq!(json["draws"][0]["number"], 8);
    }
}
