// SPDX-License-Identifier: MPL-2.0
//! Visibility of the boarding-pass overlay.

/// Two-state cell: the boarding pass is either hidden or shown.
///
/// Starts [`BoardingPass::Hidden`]. Both transitions are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardingPass {
    #[default]
    Hidden,
    Visible,
}

impl BoardingPass {
    /// Shows the overlay.
    pub fn activate(&mut self) {
        *self = BoardingPass::Visible;
    }

    /// Hides the overlay.
    pub fn dismiss(&mut self) {
        *self = BoardingPass::Hidden;
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, BoardingPass::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(BoardingPass::default(), BoardingPass::Hidden);
        assert!(!BoardingPass::default().is_visible());
    }

    #[test]
    fn activate_shows_and_is_idempotent() {
        let mut state = BoardingPass::Hidden;
        state.activate();
        assert_eq!(state, BoardingPass::Visible);
        state.activate();
        assert_eq!(state, BoardingPass::Visible);
    }

    #[test]
    fn dismiss_hides_and_is_idempotent() {
        let mut state = BoardingPass::Visible;
        state.dismiss();
        assert_eq!(state, BoardingPass::Hidden);
        state.dismiss();
        assert_eq!(state, BoardingPass::Hidden);
    }
}
