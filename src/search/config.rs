//! Configuration types for a search.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, game::Player};

/// Share of the total budget spent expanding the tree; the rest is left for rollup.
pub const DEFAULT_SOFT_FRACTION: f64 = 0.9;

/// How long before the total budget the decision must be ready, in milliseconds.
pub const DEFAULT_HARD_MARGIN_MS: f64 = 50.0;

/// Total wall-clock time allowed for one decision.
///
/// # Examples
///
/// ```
/// use linemark::search::TimeBudget;
///
/// let budget = TimeBudget::from_secs(2.0)?;
/// assert_eq!(budget.as_millis(), 2000.0);
/// assert!(TimeBudget::from_secs(0.0).is_err());
/// # Ok::<(), linemark::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBudget {
    millis: f64,
}

impl TimeBudget {
    /// Budget from a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns error if `seconds` is not a positive, finite number.
    pub fn from_secs(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(Error::InvalidTimeBudget { seconds });
        }
        Ok(Self {
            millis: seconds * 1000.0,
        })
    }

    /// Budget from a number of milliseconds.
    ///
    /// # Errors
    ///
    /// Returns error if `millis` is not a positive, finite number.
    pub fn from_millis(millis: f64) -> Result<Self> {
        if !millis.is_finite() || millis <= 0.0 {
            return Err(Error::InvalidTimeBudget {
                seconds: millis / 1000.0,
            });
        }
        Ok(Self { millis })
    }

    pub fn as_millis(&self) -> f64 {
        self.millis
    }

    pub fn as_secs(&self) -> f64 {
        self.millis / 1000.0
    }
}

/// Configuration for a search.
///
/// # Examples
///
/// ```
/// use linemark::{game::Player, search::SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_soft_fraction(0.8)
///     .with_hard_margin_ms(100.0)
///     .with_first_player(Player::Min);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Share of the budget during which new nodes may be expanded
    pub soft_fraction: f64,
    /// Safety margin subtracted from the budget to get the hard deadline
    pub hard_margin_ms: f64,
    /// Player to move at the root
    pub first_player: Player,
}

impl SearchConfig {
    /// Default configuration: 90% soft budget, 50 ms hard margin, Max to move.
    pub fn new() -> Self {
        Self {
            soft_fraction: DEFAULT_SOFT_FRACTION,
            hard_margin_ms: DEFAULT_HARD_MARGIN_MS,
            first_player: Player::Max,
        }
    }

    pub fn with_soft_fraction(mut self, fraction: f64) -> Self {
        self.soft_fraction = fraction;
        self
    }

    pub fn with_hard_margin_ms(mut self, margin_ms: f64) -> Self {
        self.hard_margin_ms = margin_ms;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Check that the settings describe a usable search.
    ///
    /// # Errors
    ///
    /// Returns error if the soft fraction is outside `(0, 1]` or the hard
    /// margin is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.soft_fraction > 0.0 && self.soft_fraction <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "soft fraction must be in (0, 1], got {}",
                    self.soft_fraction
                ),
            });
        }
        if !self.hard_margin_ms.is_finite() || self.hard_margin_ms < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "hard margin must be a non-negative number of milliseconds, got {}",
                    self.hard_margin_ms
                ),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
