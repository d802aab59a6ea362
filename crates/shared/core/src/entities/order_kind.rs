use serde::{Deserialize, Serialize};

/// Order kinds emitted by the simulation runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Rests on the book at a limit price
    #[serde(rename = "LIMIT_ORDER", alias = "limit", alias = "LIMIT")]
    Limit,
    /// Executes against the book; carries no price
    #[serde(rename = "MARKET_ORDER", alias = "market", alias = "MARKET")]
    Market,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let kind: OrderKind = serde_json::from_str("\"LIMIT_ORDER\"").unwrap();
        assert_eq!(kind, OrderKind::Limit);

        let kind: OrderKind = serde_json::from_str("\"market\"").unwrap();
        assert_eq!(kind, OrderKind::Market);

        assert_eq!(
            serde_json::to_string(&OrderKind::Market).unwrap(),
            "\"MARKET_ORDER\""
        );
    }
}
