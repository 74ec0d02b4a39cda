use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use plotscript::interpreter::{
    kernel::{EXIT, Envelope, Kernel, MessageQueue, RESET, STOP},
    session::PARSE_FAILURE,
};

const WAIT: Duration = Duration::from_secs(5);

fn value(src: &str) -> Envelope {
    Envelope::Value(plotscript::get_result(src).unwrap())
}

/// Polls for the next result, giving up after `WAIT`.
fn result_within(kernel: &Kernel) -> Option<Envelope> {
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        if let Some(envelope) = kernel.try_result() {
            return Some(envelope);
        }
        thread::sleep(Duration::from_millis(1));
    }
    None
}

#[test]
fn results_come_back_in_submission_order() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(+ 1 2)");
    kernel.submit("(list 1 2)");
    kernel.submit("(* 2 3)");

    assert_eq!(kernel.wait_result(), Some(value("(3)")));
    assert_eq!(kernel.wait_result(), Some(value("(list 1 2)")));
    assert_eq!(kernel.wait_result(), Some(value("(6)")));

    kernel.stop();
}

#[test]
fn bindings_persist_across_messages() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(define r 10)");
    kernel.submit("(* r r)");

    assert_eq!(kernel.wait_result(), Some(value("(10)")));
    assert_eq!(kernel.wait_result(), Some(value("(100)")));

    kernel.stop();
}

#[test]
fn faults_become_error_envelopes_and_the_worker_keeps_going() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(+ 1 2");
    kernel.submit("(undefined)");
    kernel.submit("(+ 1 2)");

    assert_eq!(kernel.wait_result(),
               Some(Envelope::Error(PARSE_FAILURE.to_string())));
    let fault = kernel.wait_result().unwrap();
    assert!(fault.is_error());
    assert!(fault.to_string().starts_with("Error"));
    assert_eq!(kernel.wait_result(), Some(value("(3)")));

    kernel.stop();
}

#[test]
fn stop_sentinel_produces_no_output() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(+ 1 1)");
    kernel.submit("%stop");
    kernel.submit("(+ 2 2)");

    assert_eq!(kernel.wait_result(), Some(value("(2)")));

    let deadline = Instant::now() + WAIT;
    while kernel.is_running() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(!kernel.is_running());
    assert_eq!(kernel.try_result(), None);
}

#[test]
fn submitted_sentinels_never_stop_the_next_worker() {
    for sentinel in [STOP, RESET, EXIT] {
        let mut kernel = Kernel::new();
        for round in 0..50 {
            kernel.start();
            kernel.submit(sentinel);
            kernel.stop();

            kernel.start();
            kernel.submit("(+ 1 2)");
            assert_eq!(result_within(&kernel),
                       Some(value("(3)")),
                       "no result after `{sentinel}` in round {round}");
            kernel.stop();
        }
    }
}

#[test]
fn programs_queued_while_stopped_run_after_start() {
    let mut kernel = Kernel::new();
    kernel.submit("(+ 1 2)");
    kernel.submit(STOP);
    kernel.submit("(* 2 3)");

    kernel.start();
    assert_eq!(result_within(&kernel), Some(value("(3)")));
    assert_eq!(result_within(&kernel), Some(value("(6)")));
    kernel.stop();
}

#[test]
fn reset_discards_bindings() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(define a 1)");
    assert_eq!(kernel.wait_result(), Some(value("(1)")));

    kernel.reset();
    assert!(kernel.is_running());

    kernel.submit("(a)");
    assert!(kernel.wait_result().is_some_and(|e| e.is_error()));
    kernel.submit("(define a 2)");
    assert_eq!(kernel.wait_result(), Some(value("(2)")));

    kernel.stop();
}

#[test]
fn stopped_kernel_can_be_restarted() {
    let mut kernel = Kernel::new();
    kernel.start();
    kernel.stop();
    assert!(!kernel.is_running());

    kernel.start();
    kernel.submit("(+ 1 2)");
    assert_eq!(kernel.wait_result(), Some(value("(3)")));
    kernel.stop();
}

#[test]
fn interrupt_starts_a_clean_worker() {
    let mut kernel = Kernel::new();
    kernel.start();

    kernel.submit("(define a 1)");
    assert_eq!(kernel.wait_result(), Some(value("(1)")));

    let flag = AtomicBool::new(true);
    assert_eq!(kernel.wait_result_or_interrupt(&flag), None);
    assert!(!flag.load(Ordering::SeqCst));

    kernel.submit("(a)");
    assert!(kernel.wait_result().is_some_and(|e| e.is_error()));
    kernel.stop();
}

#[test]
fn interrupt_cancels_a_wait_that_would_never_finish() {
    // No worker is running, so nothing would ever answer this program.
    let mut kernel = Kernel::new();
    kernel.submit("(define a 1)");

    let flag = AtomicBool::new(true);
    assert_eq!(kernel.wait_result_or_interrupt(&flag), None);
    assert!(kernel.is_running());

    kernel.submit("(a)");
    assert!(result_within(&kernel).is_some_and(|e| e.is_error()));
    kernel.stop();
}

#[test]
fn interruptible_wait_returns_results() {
    let mut kernel = Kernel::new();
    kernel.start();

    let flag = AtomicBool::new(false);
    kernel.submit("(+ 1 2)");
    assert_eq!(kernel.wait_result_or_interrupt(&flag), Some(value("(3)")));
    kernel.stop();
}

#[test]
fn queue_is_shared_between_threads() {
    let queue = MessageQueue::new();
    let producer = queue.clone();

    let handle = thread::spawn(move || {
        for i in 0..100 {
            producer.push(i);
        }
    });

    let received: Vec<i32> = (0..100).filter_map(|_| queue.wait_and_pop()).collect();
    handle.join().unwrap();

    assert_eq!(received, (0..100).collect::<Vec<_>>());
    assert!(queue.is_empty());
    assert_eq!(queue.wait_and_pop_timeout(Duration::from_millis(1)), None);
}
