//! Event Recorder
//!
//! Collects the two event kinds emitted by the runner into ordered record
//! sequences. A fresh recorder is created for every run; nothing is shared
//! between instances.

use agora_core::{MarketStepEndEvent, MarketStepRecord, OrderEvent, OrderRecord};
use agora_ports::{SimulationObserver, SinkError, SinkResult};

use crate::run::RecordedRun;

const ORDER_EVENT: &str = "order";
const STEP_END_EVENT: &str = "market step end";

/// Unwrap a required attribute or report which one is missing
fn require<T>(value: Option<T>, event: &'static str, field: &'static str) -> SinkResult<T> {
    value.ok_or_else(|| {
        log::error!("Rejecting {} event: missing `{}`", event, field);
        SinkError::MalformedEvent { event, field }
    })
}

/// Stateful sink for one simulation run
#[derive(Debug, Default)]
pub struct EventRecorder {
    orders: Vec<OrderRecord>,
    market_steps: Vec<MarketStepRecord>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders recorded so far, in arrival order
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Market step snapshots recorded so far, in arrival order
    pub fn market_steps(&self) -> &[MarketStepRecord] {
        &self.market_steps
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn market_step_count(&self) -> usize {
        self.market_steps.len()
    }

    /// Seal the recorded sequences once the run has finished
    pub fn finish(self) -> RecordedRun {
        log::debug!(
            "Recorder sealed: {} orders, {} market steps",
            self.orders.len(),
            self.market_steps.len()
        );
        RecordedRun::new(self.orders, self.market_steps)
    }

    /// Normalize an order event; the whole record is built before anything is appended
    fn normalize_order(event: &OrderEvent) -> SinkResult<OrderRecord> {
        Ok(OrderRecord {
            order_id: require(event.order_id, ORDER_EVENT, "order_id")?,
            market_id: require(event.market_id, ORDER_EVENT, "market_id")?,
            time: require(event.time, ORDER_EVENT, "time")?,
            agent_id: require(event.agent_id, ORDER_EVENT, "agent_id")?,
            is_buy: require(event.is_buy, ORDER_EVENT, "is_buy")?,
            kind: require(event.kind, ORDER_EVENT, "kind")?,
            price: event.price,
            volume: require(event.volume, ORDER_EVENT, "volume")?,
            ttl: event.ttl,
        })
    }

    /// Resolve the session and market references into plain readings
    fn normalize_step(event: &MarketStepEndEvent) -> SinkResult<MarketStepRecord> {
        let session = require(event.session.as_ref(), STEP_END_EVENT, "session")?;
        let market = require(event.market.as_ref(), STEP_END_EVENT, "market")?;

        Ok(MarketStepRecord {
            session_id: session.session_id,
            market_time: require(market.time, STEP_END_EVENT, "market.time")?,
            market_id: require(market.market_id, STEP_END_EVENT, "market.market_id")?,
            market_name: require(market.name.clone(), STEP_END_EVENT, "market.name")?,
            market_price: require(market.market_price, STEP_END_EVENT, "market.market_price")?,
            fundamental_price: require(
                market.fundamental_price,
                STEP_END_EVENT,
                "market.fundamental_price",
            )?,
        })
    }
}

impl SimulationObserver for EventRecorder {
    fn on_order(&mut self, event: &OrderEvent) -> SinkResult<()> {
        let record = Self::normalize_order(event)?;
        log::trace!(
            "order #{} t={} market={} agent={} {:?}",
            record.order_id,
            record.time,
            record.market_id,
            record.agent_id,
            record.side()
        );
        self.orders.push(record);
        Ok(())
    }

    fn on_market_step_end(&mut self, event: &MarketStepEndEvent) -> SinkResult<()> {
        let record = Self::normalize_step(event)?;
        log::trace!(
            "step end t={} market={} price={}",
            record.market_time,
            record.market_name,
            record.market_price
        );
        self.market_steps.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{MarketSnapshot, OrderKind, SessionRef};

    fn step(market_id: usize, time: u64, price: f64) -> MarketStepEndEvent {
        MarketStepEndEvent::new(
            0,
            MarketSnapshot::new(market_id, format!("Market-{}", market_id), time, price, 300.0),
        )
    }

    #[test]
    fn test_records_orders_in_call_order() {
        let mut recorder = EventRecorder::new();

        recorder
            .on_order(&OrderEvent::limit(2, 1, 5, 10, true, 301.0, 1))
            .unwrap();
        recorder
            .on_order(&OrderEvent::market(1, 0, 5, 11, false, 3))
            .unwrap();

        let ids: Vec<u64> = recorder.orders().iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(recorder.orders()[1].kind, OrderKind::Market);
        assert_eq!(recorder.orders()[1].price, None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut recorder = EventRecorder::new();
        let order = OrderEvent::limit(1, 0, 0, 7, true, 300.0, 1);

        recorder.on_order(&order).unwrap();
        recorder.on_order(&order).unwrap();

        assert_eq!(recorder.order_count(), 2);
    }

    #[test]
    fn test_step_end_resolves_references() {
        let mut recorder = EventRecorder::new();
        recorder.on_market_step_end(&step(2, 17, 299.5)).unwrap();

        let record = &recorder.market_steps()[0];
        assert_eq!(record.session_id, 0);
        assert_eq!(record.market_id, 2);
        assert_eq!(record.market_name, "Market-2");
        assert_eq!(record.market_time, 17);
        assert_eq!(record.market_price, 299.5);
        assert_eq!(record.fundamental_price, 300.0);
    }

    #[test]
    fn test_missing_order_field_rejected() {
        let mut recorder = EventRecorder::new();
        let mut order = OrderEvent::limit(1, 0, 0, 7, true, 300.0, 1);
        order.agent_id = None;

        let err = recorder.on_order(&order).unwrap_err();
        assert_eq!(
            err,
            SinkError::MalformedEvent {
                event: "order",
                field: "agent_id"
            }
        );
        assert_eq!(recorder.order_count(), 0);
    }

    #[test]
    fn test_missing_price_is_not_malformed() {
        let mut recorder = EventRecorder::new();
        let mut order = OrderEvent::limit(1, 0, 0, 7, true, 300.0, 1);
        order.price = None;

        assert!(recorder.on_order(&order).is_ok());
    }

    #[test]
    fn test_missing_session_rejected() {
        let mut recorder = EventRecorder::new();
        let mut event = step(0, 0, 300.0);
        event.session = None;

        assert!(matches!(
            recorder.on_market_step_end(&event),
            Err(SinkError::MalformedEvent {
                field: "session",
                ..
            })
        ));
        assert_eq!(recorder.market_step_count(), 0);
    }

    #[test]
    fn test_missing_market_reading_rejected() {
        let mut recorder = EventRecorder::new();
        let event = MarketStepEndEvent {
            session: Some(SessionRef { session_id: 1 }),
            market: Some(MarketSnapshot {
                market_price: None,
                ..MarketSnapshot::new(0, "SpotMarket-1", 3, 300.0, 300.0)
            }),
        };

        let err = recorder.on_market_step_end(&event).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed market step end event: missing `market.market_price`"
        );
    }

    #[test]
    fn test_finish_keeps_everything() {
        let mut recorder = EventRecorder::new();
        recorder.on_market_step_end(&step(0, 0, 300.0)).unwrap();
        recorder
            .on_order(&OrderEvent::limit(1, 0, 0, 7, true, 300.0, 1))
            .unwrap();

        let run = recorder.finish();
        assert_eq!(run.orders().len(), 1);
        assert_eq!(run.market_steps().len(), 1);
    }
}
