//! Step-by-step playback over a trace
//!
//! A [`StepCursor`] is what an animation front end drives with its
//! previous, next and reset controls. Movement clamps at both ends.

use crate::notation::processor::ProcessingError;
use crate::notation::trace::Step;

#[derive(Debug, Clone)]
pub struct StepCursor<'a> {
    steps: &'a [Step],
    position: usize,
}

impl<'a> StepCursor<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        StepCursor { steps, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the last step; `0` for an empty trace.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn current(&self) -> Option<&'a Step> {
        self.steps.get(self.position)
    }

    pub fn is_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_end(&self) -> bool {
        self.position == self.last_index()
    }

    pub fn next_step(&mut self) -> Option<&'a Step> {
        self.position = (self.position + 1).min(self.last_index());
        self.current()
    }

    pub fn prev_step(&mut self) -> Option<&'a Step> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    pub fn reset(&mut self) -> Option<&'a Step> {
        self.position = 0;
        self.current()
    }

    pub fn seek(&mut self, index: usize) -> Result<&'a Step, ProcessingError> {
        let step = self
            .steps
            .get(index)
            .ok_or(ProcessingError::StepOutOfRange {
                index,
                total: self.steps.len(),
            })?;
        self.position = index;
        Ok(step)
    }

    /// Progress label, e.g. `Step 3 / 13`.
    pub fn progress(&self) -> String {
        format!("Step {} / {}", self.position, self.last_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::conversion::convert_postfix_to_prefix;

    #[test]
    fn test_walks_forward_and_clamps() {
        let result = convert_postfix_to_prefix("AB+");
        let mut cursor = StepCursor::new(&result.steps);
        assert!(cursor.is_start());
        assert_eq!(cursor.current().unwrap().step, 1);

        for _ in 0..10 {
            cursor.next_step();
        }
        assert!(cursor.is_end());
        assert!(cursor.current().unwrap().is_terminal());
        assert_eq!(cursor.progress(), "Step 5 / 5");
    }

    #[test]
    fn test_prev_and_reset() {
        let result = convert_postfix_to_prefix("AB+");
        let mut cursor = StepCursor::new(&result.steps);
        assert_eq!(cursor.prev_step().unwrap().step, 1);

        cursor.seek(4).unwrap();
        assert_eq!(cursor.prev_step().unwrap().step, 4);
        assert_eq!(cursor.reset().unwrap().step, 1);
        assert_eq!(cursor.progress(), "Step 0 / 5");
    }

    #[test]
    fn test_seek_out_of_range() {
        let result = convert_postfix_to_prefix("AB+");
        let mut cursor = StepCursor::new(&result.steps);
        let err = cursor.seek(6).unwrap_err();
        assert_eq!(err, ProcessingError::StepOutOfRange { index: 6, total: 6 });
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_empty_trace() {
        let result = convert_postfix_to_prefix("");
        let mut cursor = StepCursor::new(&result.steps);
        assert!(cursor.current().is_none());
        assert!(cursor.next_step().is_none());
        assert!(cursor.is_start() && cursor.is_end());
    }
}
