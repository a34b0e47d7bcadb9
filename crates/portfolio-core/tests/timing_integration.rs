//! Timer-driven behaviour: the typewriter handle and scroll throttling.

use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc;
use parking_lot::Mutex;
use portfolio_core::scroll_spy::throttle_latest;
use portfolio_core::{TypePhase, Typewriter, TypewriterHandle, TypewriterTiming};
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Typewriter
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_typewriter_full_cycle() -> anyhow::Result<()> {
    let typewriter = Typewriter::new(["ab", "c"])?;
    let (_handle, rx) = TypewriterHandle::spawn(typewriter, TypewriterTiming::default());

    assert_eq!(rx.borrow().text, "");

    sleep(ms(61)).await;
    assert_eq!(rx.borrow().text, "a");

    sleep(ms(60)).await;
    let frame = rx.borrow().clone();
    assert_eq!(frame.text, "ab");
    assert_eq!(frame.phase, TypePhase::Holding);

    // Hold ends at 1620ms, then one character every 30ms.
    sleep(ms(1500)).await;
    assert_eq!(rx.borrow().phase, TypePhase::Deleting);
    assert_eq!(rx.borrow().text, "ab");

    sleep(ms(30)).await;
    assert_eq!(rx.borrow().text, "a");

    sleep(ms(30)).await;
    let frame = rx.borrow().clone();
    assert_eq!(frame.text, "");
    assert_eq!(frame.phrase_index, 1);
    assert_eq!(frame.phase, TypePhase::Typing);

    sleep(ms(60)).await;
    assert_eq!(rx.borrow().text, "c");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cursor_blinks_independently() -> anyhow::Result<()> {
    let typewriter = Typewriter::new(["hello"])?;
    let (_handle, rx) = TypewriterHandle::spawn(typewriter, TypewriterTiming::default());

    assert!(rx.borrow().cursor_visible);
    sleep(ms(501)).await;
    assert!(!rx.borrow().cursor_visible);
    sleep(ms(500)).await;
    assert!(rx.borrow().cursor_visible);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_updates() -> anyhow::Result<()> {
    let typewriter = Typewriter::new(["hello"])?;
    let (handle, mut rx) = TypewriterHandle::spawn(typewriter, TypewriterTiming::default());

    sleep(ms(130)).await;
    let before = rx.borrow_and_update().text.clone();
    assert_eq!(before, "he");

    drop(handle);
    sleep(ms(5000)).await;
    assert_eq!(rx.borrow().text, before);
    // Both publishing tasks are gone, so the channel is closed.
    assert!(rx.changed().await.is_err());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing_is_honoured() -> anyhow::Result<()> {
    let timing = TypewriterTiming {
        type_interval_ms: 10,
        ..TypewriterTiming::default()
    };
    let typewriter = Typewriter::new(["abc"])?;
    let (_handle, rx) = TypewriterHandle::spawn(typewriter, timing);

    sleep(ms(31)).await;
    assert_eq!(rx.borrow().text, "abc");
    Ok(())
}

// ============================================================================
// Scroll throttling
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_throttle_delivers_leading_and_latest() {
    let (tx, rx) = mpsc::unbounded::<u32>();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let task = tokio::spawn(throttle_latest(rx, ms(100), move |v| sink.lock().push(v)));

    // Burst at t=0: first handled now, last one at the window edge.
    for v in 1..=3 {
        tx.unbounded_send(v).unwrap();
    }
    sleep(ms(10)).await;
    assert_eq!(*seen.lock(), vec![1]);

    sleep(ms(100)).await;
    assert_eq!(*seen.lock(), vec![1, 3]);

    // Arrives inside the window opened at 100ms; flushed at 200ms.
    sleep(ms(40)).await;
    tx.unbounded_send(4).unwrap();
    sleep(ms(10)).await;
    assert_eq!(*seen.lock(), vec![1, 3]);
    sleep(ms(50)).await;
    assert_eq!(*seen.lock(), vec![1, 3, 4]);

    // Quiet period; the next sample is handled right away.
    sleep(ms(190)).await;
    tx.unbounded_send(5).unwrap();
    sleep(ms(1)).await;
    assert_eq!(*seen.lock(), vec![1, 3, 4, 5]);

    // A sample pending when the stream ends is still delivered.
    tx.unbounded_send(6).unwrap();
    drop(tx);
    task.await.unwrap();
    assert_eq!(*seen.lock(), vec![1, 3, 4, 5, 6]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_on_empty_stream_returns() {
    let (tx, rx) = mpsc::unbounded::<u32>();
    drop(tx);
    let mut calls = 0;
    throttle_latest(rx, ms(100), |_| calls += 1).await;
    assert_eq!(calls, 0);
}
