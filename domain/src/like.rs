//! Like toggling results.

use serde::Serialize;

/// Which way a toggle flipped the like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

impl LikeOutcome {
    /// Numeric flag used by clients: 1 for liked, 0 for unliked.
    pub fn flag(self) -> u8 {
        match self {
            LikeOutcome::Liked => 1,
            LikeOutcome::Unliked => 0,
        }
    }
}

/// The post's like total after a toggle, and the direction of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeToggle {
    pub total: i64,
    pub outcome: LikeOutcome,
}

impl LikeToggle {
    pub fn new(total: i64, outcome: LikeOutcome) -> Self {
        Self { total, outcome }
    }

    /// `(total, flag)` pair.
    pub fn as_pair(&self) -> (i64, u8) {
        (self.total, self.outcome.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_uses_numeric_flag() {
        assert_eq!(LikeToggle::new(1, LikeOutcome::Liked).as_pair(), (1, 1));
        assert_eq!(LikeToggle::new(0, LikeOutcome::Unliked).as_pair(), (0, 0));
    }
}
