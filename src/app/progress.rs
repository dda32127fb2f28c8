use super::*;
use crate::model::{ALL_COMPLETE, LAST_LEVEL};

impl JourneyApp {
    pub fn unlocked_level(&self) -> usize {
        self.progress.unlocked_level
    }

    pub fn is_level_unlocked(&self, number: usize) -> bool {
        (FIRST_LEVEL..=LAST_LEVEL).contains(&number) && number <= self.progress.unlocked_level
    }

    pub fn is_journey_complete(&self) -> bool {
        self.progress.unlocked_level >= ALL_COMPLETE
    }

    /// Hay temporizadores del controlador pendientes (aviso o final).
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }
}
