//! Manual two-player scoreboard.

#[cfg(test)]
#[path = "scoreboard_test.rs"]
mod scoreboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    A,
    B,
}

/// Button actions, keyed by the `data-action` attribute on each control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreAction {
    Increment(Player),
    Decrement(Player),
    Reset,
    Swap,
}

impl ScoreAction {
    /// Parse a `data-action` value such as `incA` or `decB`.
    #[must_use]
    pub fn from_data_action(raw: &str) -> Option<Self> {
        match raw {
            "incA" => Some(Self::Increment(Player::A)),
            "decA" => Some(Self::Decrement(Player::A)),
            "incB" => Some(Self::Increment(Player::B)),
            "decB" => Some(Self::Decrement(Player::B)),
            _ => None,
        }
    }

    /// `data-action` value for the per-player buttons; reset/swap use ids instead.
    #[must_use]
    pub fn data_action(self) -> Option<&'static str> {
        match self {
            Self::Increment(Player::A) => Some("incA"),
            Self::Decrement(Player::A) => Some("decA"),
            Self::Increment(Player::B) => Some("incB"),
            Self::Decrement(Player::B) => Some("decB"),
            Self::Reset | Self::Swap => None,
        }
    }
}

/// Two non-negative counters plus the selected player label.
///
/// `label_index` mirrors the player selector next to the scores; swapping the
/// scores flips it between the first and second option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    a: u32,
    b: u32,
    label_index: usize,
}

impl Scoreboard {
    #[must_use]
    pub fn with_scores(a: u32, b: u32) -> Self {
        Self { a, b, label_index: 0 }
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    #[must_use]
    pub fn label_index(&self) -> usize {
        self.label_index
    }

    /// Record a selection the user made directly on the player selector.
    pub fn set_label_index(&mut self, index: usize) {
        self.label_index = index;
    }

    pub fn apply(&mut self, action: ScoreAction) {
        match action {
            ScoreAction::Increment(player) => self.increment(player),
            ScoreAction::Decrement(player) => self.decrement(player),
            ScoreAction::Reset => self.reset(),
            ScoreAction::Swap => self.swap(),
        }
    }

    pub fn increment(&mut self, player: Player) {
        let slot = self.slot(player);
        *slot = slot.saturating_add(1);
    }

    /// Decrement clamped at zero.
    pub fn decrement(&mut self, player: Player) {
        let slot = self.slot(player);
        *slot = slot.saturating_sub(1);
    }

    /// Zero both scores. The player label is left alone.
    pub fn reset(&mut self) {
        self.a = 0;
        self.b = 0;
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
        self.label_index = if self.label_index == 0 { 1 } else { 0 };
    }

    fn slot(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }
}
