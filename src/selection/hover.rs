//! Hovered-card tracking for tooltips and card previews.

/// Remembers which card the pointer is over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<String>,
}

impl HoverTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a card.
    pub fn enter(&mut self, card_name: impl Into<String>) {
        self.hovered = Some(card_name.into());
    }

    /// Pointer left whatever card it was over.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }
}
