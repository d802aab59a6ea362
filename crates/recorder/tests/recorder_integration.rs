//! Recorder Integration Test
//!
//! Drives an EventRecorder the way a runner does: a tick-major stream of
//! market step ends interleaved with orders, then seals it.

use agora_core::{MarketSnapshot, MarketStepEndEvent, OrderEvent};
use agora_ports::{SimulationObserver, SinkError};
use agora_recorder::EventRecorder;

const MARKETS: [&str; 3] = ["SpotMarket-1", "SpotMarket-2", "IndexMarket-I"];

fn drive(observer: &mut dyn SimulationObserver, ticks: u64) -> Result<(), SinkError> {
    let mut order_id = 0;
    for t in 0..ticks {
        for m in 0..MARKETS.len() {
            order_id += 1;
            observer.on_order(&OrderEvent::limit(
                order_id,
                m,
                t,
                m as u64 * 500 + t,
                t % 2 == 0,
                300.0,
                1,
            ))?;
        }
        for (m, name) in MARKETS.iter().enumerate() {
            let price = 300.0 + t as f64 + m as f64 / 10.0;
            observer.on_market_step_end(&MarketStepEndEvent::new(
                0,
                MarketSnapshot::new(m, *name, t, price, 300.0),
            ))?;
        }
    }
    Ok(())
}

#[test]
fn test_tick_major_stream() {
    let _ = env_logger::try_init();

    let mut recorder = EventRecorder::new();
    drive(&mut recorder, 4).unwrap();
    let run = recorder.finish();

    assert_eq!(run.market_steps().len(), 4 * MARKETS.len());
    assert_eq!(run.orders().len(), 4 * MARKETS.len());

    // Emission order is preserved: market index cycles fastest
    let ids: Vec<usize> = run.market_steps().iter().map(|s| s.market_id).collect();
    assert_eq!(&ids[..6], &[0, 1, 2, 0, 1, 2]);

    let times: Vec<u64> = run.steps_for_market(1).map(|s| s.market_time).collect();
    assert_eq!(times, vec![0, 1, 2, 3]);
}

#[test]
fn test_fresh_recorders_do_not_share_state() {
    let _ = env_logger::try_init();

    let mut first = EventRecorder::new();
    drive(&mut first, 2).unwrap();

    let second = EventRecorder::new();
    assert_eq!(second.order_count(), 0);
    assert_eq!(second.market_step_count(), 0);
    assert_eq!(first.market_step_count(), 6);
}

#[test]
fn test_malformed_event_stops_the_stream() {
    let _ = env_logger::try_init();

    let mut recorder = EventRecorder::new();
    recorder
        .on_order(&OrderEvent::limit(1, 0, 0, 1, true, 300.0, 1))
        .unwrap();

    let broken = OrderEvent {
        volume: None,
        ..OrderEvent::limit(2, 0, 0, 2, false, 300.0, 1)
    };
    assert!(recorder.on_order(&broken).is_err());

    // The earlier record is untouched and no partial record was added
    assert_eq!(recorder.order_count(), 1);
    assert_eq!(recorder.orders()[0].order_id, 1);
}
