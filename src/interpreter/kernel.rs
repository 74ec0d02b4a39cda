use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};
use log::{debug, trace, warn};

use crate::interpreter::{
    session::{Interpreter, PARSE_FAILURE},
    value::expression::Expression,
};

/// Front-end command that starts a stopped kernel.
pub const START: &str = "%start";
/// Sentinel that stops the worker.
pub const STOP: &str = "%stop";
/// Sentinel that stops the worker before a fresh one is started.
pub const RESET: &str = "%reset";
/// Sentinel that stops the worker before the front-end exits.
pub const EXIT: &str = "%exit";

/// How often a cancellable wait checks its interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Returns `true` for a message that terminates the worker loop.
#[must_use]
pub fn is_sentinel(message: &str) -> bool {
    matches!(message.trim(), STOP | RESET | EXIT)
}

/// An unbounded multi-producer, multi-consumer FIFO queue.
///
/// Cloning the queue clones a handle; all clones share the same items.
/// Pushing never blocks.
///
/// # Example
/// ```
/// use plotscript::interpreter::kernel::MessageQueue;
///
/// let queue = MessageQueue::new();
/// assert_eq!(queue.try_pop(), None);
///
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.wait_and_pop(), Some(1));
/// assert_eq!(queue.try_pop(), Some(2));
/// ```
#[derive(Debug)]
pub struct MessageQueue<T> {
    sender:   Sender<T>,
    receiver: Receiver<T>,
}

impl<T> Clone for MessageQueue<T> {
    fn clone(&self) -> Self {
        Self { sender:   self.sender.clone(),
               receiver: self.receiver.clone(), }
    }
}

impl<T> Default for MessageQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MessageQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Adds an item at the back of the queue.
    pub fn push(&self, item: T) {
        // This handle owns a receiver, so the channel is never disconnected.
        let _ = self.sender.send(item);
    }

    /// Removes the front item, blocking until one is available.
    ///
    /// Returns `None` only if every sending end is gone, which cannot happen
    /// while this handle exists.
    #[must_use]
    pub fn wait_and_pop(&self) -> Option<T> {
        self.receiver.recv().ok()
    }

    /// Removes the front item if there is one, without blocking.
    #[must_use]
    pub fn try_pop(&self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(item) => Some(item),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Removes the front item, blocking for at most `timeout`.
    #[must_use]
    pub fn wait_and_pop_timeout(&self, timeout: Duration) -> Option<T> {
        match self.receiver.recv_timeout(timeout) {
            Ok(item) => Some(item),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Returns `true` if the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    fn sending_end(&self) -> Sender<T> {
        self.sender.clone()
    }

    fn receiving_end(&self) -> Receiver<T> {
        self.receiver.clone()
    }
}

/// One outbound kernel message: a result value or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Value(Expression),
    Error(String),
}

impl Envelope {
    /// Returns `true` for an error envelope.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The result value, if evaluation succeeded.
    #[must_use]
    pub const fn value(&self) -> Option<&Expression> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Error(message) => write!(f, "{message}"),
        }
    }
}

/// Parses and evaluates one message, packing the outcome in an envelope.
///
/// # Example
/// ```
/// use plotscript::interpreter::{
///     kernel::{Envelope, evaluate_message},
///     session::Interpreter,
/// };
///
/// let mut interp = Interpreter::new();
/// assert_eq!(evaluate_message(&mut interp, "(+ 1 2)"),
///            Envelope::Value(3.0.into()));
/// assert_eq!(evaluate_message(&mut interp, "(+ 1 2"),
///            Envelope::Error("Error: Invalid Expression. Could not parse.".to_string()));
/// assert!(evaluate_message(&mut interp, "(undefined 1)").is_error());
/// ```
pub fn evaluate_message(interp: &mut Interpreter, message: &str) -> Envelope {
    if interp.parse(message).is_err() {
        return Envelope::Error(PARSE_FAILURE.to_string());
    }
    match interp.evaluate() {
        Ok(value) => Envelope::Value(value),
        Err(e) => Envelope::Error(e.to_string()),
    }
}

/// The worker loop.
///
/// Owns its environment for its whole life. Produces exactly one envelope per
/// non-sentinel message, in order, and ends on a sentinel or when every
/// sender of its inbound queue is gone.
fn run_worker(input: &Receiver<String>, output: &Sender<Envelope>) {
    let mut interp = Interpreter::new();
    debug!("kernel worker started");

    while let Ok(message) = input.recv() {
        if is_sentinel(&message) {
            debug!("kernel worker received `{}`", message.trim());
            break;
        }

        trace!("kernel evaluating: {message}");
        let envelope = evaluate_message(&mut interp, &message);
        if output.send(envelope).is_err() {
            break;
        }
    }

    debug!("kernel worker stopped");
}

/// Runs programs on a background worker thread.
///
/// Programs are submitted to an inbound queue and results are read from an
/// outbound queue. The worker keeps one environment across messages, so
/// definitions made by one program are visible to the next.
///
/// ## Usage
///
/// ```
/// use plotscript::interpreter::kernel::{Envelope, Kernel};
///
/// let mut kernel = Kernel::new();
/// kernel.start();
///
/// kernel.submit("(define a 1)");
/// kernel.submit("(+ a 2)");
/// assert_eq!(kernel.wait_result(), Some(Envelope::Value(1.0.into())));
/// assert_eq!(kernel.wait_result(), Some(Envelope::Value(3.0.into())));
///
/// kernel.reset();
/// kernel.submit("(+ a 2)");
/// assert!(kernel.wait_result().is_some_and(|e| e.is_error()));
///
/// kernel.stop();
/// assert!(!kernel.is_running());
/// ```
#[derive(Debug, Default)]
pub struct Kernel {
    input:  MessageQueue<String>,
    output: MessageQueue<Envelope>,
    worker: Option<JoinHandle<()>>,
}

impl Kernel {
    /// Creates a kernel whose worker is not yet running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a worker with a freshly seeded environment. Does nothing if a
    /// worker is already attached.
    ///
    /// Every worker reads from its own inbound queue. Programs still waiting
    /// in the previous queue move to the new one; leftover sentinels are
    /// dropped, so a stop meant for an earlier worker never reaches this
    /// one.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }

        let previous = std::mem::take(&mut self.input);
        while let Some(message) = previous.try_pop() {
            if is_sentinel(&message) {
                trace!("dropping stale `{}`", message.trim());
            } else {
                self.input.push(message);
            }
        }

        let input = self.input.receiving_end();
        let output = self.output.sending_end();
        self.worker = Some(thread::spawn(move || run_worker(&input, &output)));
        debug!("kernel started");
    }

    /// Stops the worker after it has drained every pending message, and
    /// waits for it to finish.
    pub fn stop(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.input.push(STOP.to_string());
            if handle.join().is_err() {
                warn!("kernel worker panicked");
            }
            debug!("kernel stopped");
        }
    }

    /// Stops the worker and starts a new one, discarding every binding.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    /// Abandons the current worker without waiting for it and starts a new
    /// one with a clean environment.
    ///
    /// Both queues are replaced and pending programs are discarded, so the
    /// abandoned worker can neither consume new programs nor publish late
    /// results. It ends on its own once its current evaluation completes.
    pub fn interrupt(&mut self) {
        if self.worker.take().is_some() {
            warn!("kernel interrupted; abandoning the running worker");
        }
        self.input = MessageQueue::new();
        self.output = MessageQueue::new();
        self.start();
    }

    /// Queues a program for evaluation.
    pub fn submit(&self, program: impl Into<String>) {
        self.input.push(program.into());
    }

    /// Blocks until the next result is available.
    ///
    /// Blocks forever if no worker is running and no result is pending.
    #[must_use]
    pub fn wait_result(&self) -> Option<Envelope> {
        self.output.wait_and_pop()
    }

    /// Returns the next result if one is available.
    #[must_use]
    pub fn try_result(&self) -> Option<Envelope> {
        self.output.try_pop()
    }

    /// Blocks until the next result is available or `interrupted` is set.
    ///
    /// When the flag is seen it is cleared, the kernel is interrupted and
    /// `None` is returned.
    pub fn wait_result_or_interrupt(&mut self, interrupted: &AtomicBool) -> Option<Envelope> {
        loop {
            if let Some(envelope) = self.output.wait_and_pop_timeout(POLL_INTERVAL) {
                return Some(envelope);
            }
            if interrupted.swap(false, Ordering::SeqCst) {
                self.interrupt();
                return None;
            }
        }
    }

    /// Returns `true` while a worker is attached and has not finished.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Kernel {
    fn drop(&mut self) {
        if self.worker.take().is_some() {
            self.input.push(STOP.to_string());
        }
    }
}
