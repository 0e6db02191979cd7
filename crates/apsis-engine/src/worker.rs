//! Worker loop for the batch pool.
//!
//! Each worker receives [`PropagateTask`]s via a crossbeam channel, runs
//! one propagation per task, and sends the indexed outcome back through
//! the reply channel embedded in the task. Workers share nothing mutable:
//! the satellite travels as an `Arc`, and each propagation derives its
//! own scratch inside [`Satellite::propagate`].

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use apsis_core::PropagationOutcome;
use apsis_propagator::Satellite;

/// One unit of batch work: propagate `satellite` to `offset_s`.
pub(crate) struct PropagateTask {
    pub satellite: Arc<Satellite>,
    pub index: usize,
    pub offset_s: f64,
    pub reply: Sender<(usize, PropagationOutcome)>,
}

/// Main loop for a batch worker thread.
///
/// Runs until the task channel is closed (all senders dropped). A closed
/// reply channel means the batch caller is gone; the send result is
/// discarded in that case.
pub(crate) fn worker_loop(task_rx: Receiver<PropagateTask>) {
    while let Ok(task) = task_rx.recv() {
        let outcome = task.satellite.propagate(task.offset_s);
        let _ = task.reply.send((task.index, outcome));
    }
    // Channel closed — worker exits cleanly.
}
