use crate::draft::RegistrationDraft;
use crate::flow::{FlowKind, Section};
use crate::validator::{ValidationErrors, validate};

/// Position within a flow, `1..=step_count`.
///
/// Moving forward is gated by [`validate`]; moving back is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    flow: FlowKind,
    current: u8,
}

impl StepNavigator {
    #[must_use]
    pub const fn new(flow: FlowKind) -> Self {
        Self { flow, current: 1 }
    }

    #[must_use]
    pub const fn flow(&self) -> FlowKind {
        self.flow
    }

    #[must_use]
    pub const fn current(&self) -> u8 {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> u8 {
        self.flow.step_count()
    }

    #[must_use]
    pub fn section(&self) -> Section {
        // `current` never leaves 1..=total, so the lookup always succeeds.
        self.flow.section(self.current).unwrap_or(Section::PersonalInfo)
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 1
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current == self.total()
    }

    /// Advances one step if the current one validates, staying on the last step.
    ///
    /// # Errors
    /// The current step's [`ValidationErrors`]; the position is unchanged.
    pub fn next(&mut self, draft: &RegistrationDraft) -> Result<u8, ValidationErrors> {
        self.check_current(draft)?;
        self.current = (self.current + 1).min(self.total());
        Ok(self.current)
    }

    /// Steps back unconditionally, staying on the first step. Nothing is discarded.
    pub fn previous(&mut self) -> u8 {
        self.current = self.current.saturating_sub(1).max(1);
        self.current
    }

    /// Validates the current step without moving.
    ///
    /// # Errors
    /// The current step's [`ValidationErrors`].
    pub fn check_current(&self, draft: &RegistrationDraft) -> Result<(), ValidationErrors> {
        let errors = validate(self.current, draft);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub const fn reset(&mut self) {
        self.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn starts_on_first_step() {
        let nav = StepNavigator::new(FlowKind::Volunteer);
        assert_eq!(nav.current(), 1);
        assert!(nav.is_first());
        assert_eq!(nav.section(), Section::PersonalInfo);
    }

    #[test]
    fn empty_name_blocks_step_one() {
        let mut nav = StepNavigator::new(FlowKind::Volunteer);
        let draft = RegistrationDraft::new(FlowKind::Volunteer);

        let errors = nav.next(&draft).unwrap_err();
        assert!(errors.contains(Field::FullName));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn previous_is_clamped() {
        let mut nav = StepNavigator::new(FlowKind::AryaMitra);
        assert_eq!(nav.previous(), 1);
        assert_eq!(nav.previous(), 1);
    }
}
