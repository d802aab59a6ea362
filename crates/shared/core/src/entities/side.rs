use serde::{Deserialize, Serialize};

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Side implied by the runner's `is_buy` flag
    pub fn from_is_buy(is_buy: bool) -> Self {
        if is_buy { Side::Buy } else { Side::Sell }
    }
}
