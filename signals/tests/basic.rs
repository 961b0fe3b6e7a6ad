use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bedrock_signals::{HandlerError, Signal};

#[test]
fn delivery_follows_registration_order_across_many_subscribers() {
    let signal = Signal::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let subs: Vec<_> = (0..8)
        .map(|n| {
            let order = order.clone();
            signal.connect(move |_: &()| order.lock().unwrap().push(n))
        })
        .collect();

    signal.emit(&()).unwrap();
    assert_eq!(*order.lock().unwrap(), (0..8).collect::<Vec<_>>());
    drop(subs);
    assert!(signal.is_empty());
}

#[test]
fn handler_connected_during_emission_waits_for_the_next_one() {
    let signal = Signal::<i32>::new();
    let late_calls = Arc::new(AtomicUsize::new(0));
    let parked = Arc::new(Mutex::new(Vec::new()));

    let _connector = {
        let signal = signal.clone();
        let late_calls = late_calls.clone();
        let parked = parked.clone();
        signal.clone().connect(move |_: &i32| {
            let late_calls = late_calls.clone();
            let sub = signal.connect(move |_: &i32| {
                late_calls.fetch_add(1, Ordering::SeqCst);
            });
            parked.lock().unwrap().push(sub);
        })
    };

    signal.emit(&1).unwrap();
    // The handler added mid-emission did not run during that emission.
    assert_eq!(late_calls.load(Ordering::SeqCst), 0);

    signal.emit(&2).unwrap();
    // It runs on the next emission (along with the connector adding another).
    assert_eq!(late_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn first_handler_error_aborts_the_emission() {
    let signal = Signal::<i32>::new();
    let reached = Arc::new(AtomicUsize::new(0));

    let _before = {
        let reached = reached.clone();
        signal.connect(move |_: &i32| {
            reached.fetch_add(1, Ordering::SeqCst);
        })
    };
    let _failing = signal.connect(|value: &i32| -> Result<(), HandlerError> {
        Err(format!("rejected {value}").into())
    });
    let _after = {
        let reached = reached.clone();
        signal.connect(move |_: &i32| {
            reached.fetch_add(100, Ordering::SeqCst);
        })
    };

    let error = signal.emit(&7).unwrap_err();
    assert_eq!(error.to_string(), "rejected 7");
    // The handler before the failure ran; the one after it did not.
    assert_eq!(reached.load(Ordering::SeqCst), 1);
}

#[test]
fn explicit_disconnect_is_idempotent_after_signal_drop() {
    let signal = Signal::<()>::new();
    let sub = signal.connect(|_: &()| {});
    drop(signal);
    // Disconnecting after the signal is gone is a no-op.
    sub.disconnect();
}

#[test]
fn forget_keeps_the_handler_connected() {
    let signal = Signal::new();
    let count = Arc::new(AtomicUsize::new(0));

    {
        let count = count.clone();
        signal
            .connect(move |_: &()| {
                count.fetch_add(1, Ordering::SeqCst);
            })
            .forget();
    }

    signal.emit(&()).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!signal.is_empty());
}

#[test]
fn channel_sender_connects_as_a_subscriber() {
    let signal = Signal::new();
    let (tx, rx) = std::sync::mpsc::channel::<i32>();

    let _sub = signal.connect(tx);

    signal.emit(&5).unwrap();
    signal.emit(&6).unwrap();
    assert_eq!(rx.try_recv(), Ok(5));
    assert_eq!(rx.try_recv(), Ok(6));
    assert!(rx.try_recv().is_err());

    // A dropped receiver does not abort emissions.
    drop(rx);
    signal.emit(&7).unwrap();
}

#[test]
fn concurrent_emitters_each_deliver() {
    let signal = Signal::<usize>::new();
    let total = Arc::new(AtomicUsize::new(0));

    let _sub = {
        let total = total.clone();
        signal.connect(move |value: &usize| {
            total.fetch_add(*value, Ordering::SeqCst);
        })
    };

    let threads: Vec<_> = (0..4)
        .map(|_| {
            let signal = signal.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    signal.emit(&1).unwrap();
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 400);
}
