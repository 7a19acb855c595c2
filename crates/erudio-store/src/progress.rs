//! Cumulative study time and quiz result history.

use erudio_shared::constants::{KEY_QUIZ_HISTORY, KEY_STUDY_SECONDS};
use erudio_shared::types::QuizResult;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Total seconds studied. Missing or unparseable values count as zero.
    pub fn study_seconds(&self) -> Result<u64> {
        Ok(self
            .get_raw(KEY_STUDY_SECONDS)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0))
    }

    /// Add `seconds` to the running total and return the new total.
    pub fn add_study_seconds(&self, seconds: u64) -> Result<u64> {
        let total = self.study_seconds()?.saturating_add(seconds);
        self.set_raw(KEY_STUDY_SECONDS, &total.to_string())?;
        Ok(total)
    }

    /// Quiz results, oldest first.
    pub fn quiz_history(&self) -> Result<Vec<QuizResult>> {
        Ok(self.get_json(KEY_QUIZ_HISTORY)?.unwrap_or_default())
    }

    pub fn append_quiz_result(&self, result: &QuizResult) -> Result<()> {
        let mut history = self.quiz_history()?;
        history.push(result.clone());
        self.set_json(KEY_QUIZ_HISTORY, &history)
    }
}
