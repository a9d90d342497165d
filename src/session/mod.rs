//! Observer-paced solving sessions.
//!
//! A [`Session`] moves a steppable engine onto a worker thread and hands back
//! a [`SessionHandle`]. The worker runs one step at a time and sends each
//! [`StepResult`] over a rendezvous channel, so it advances exactly as fast
//! as the observer consumes results and never races ahead. Dropping the
//! handle, or calling [`SessionHandle::stop`], halts the worker between
//! steps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::error::SolverError;
use crate::step::{StepResult, Steppable};

/// Entry point for running an engine on a background worker.
pub struct Session;

impl Session {
    /// Spawns a worker thread that steps `engine` until it converges, fails,
    /// or is stopped.
    ///
    /// The engine must already be initialized; an engine that is not ready
    /// surfaces its error as the first received result.
    pub fn spawn<E>(mut engine: E) -> SessionHandle<E::Candidate>
    where
        E: Steppable + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        // Rendezvous channel: each send blocks until the observer receives,
        // so the worker is paced by consumption.
        let (sender, receiver) = mpsc::sync_channel(0);

        let worker = std::thread::spawn(move || {
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    tracing::debug!("session stopped by request");
                    break;
                }
                let outcome = engine.step();
                let finished = match &outcome {
                    Ok(result) => result.converged,
                    Err(_) => true,
                };
                if sender.send(outcome).is_err() {
                    // Receiver gone, nobody is observing anymore.
                    tracing::debug!("session observer disconnected");
                    break;
                }
                if finished {
                    tracing::debug!("session finished");
                    break;
                }
            }
        });

        SessionHandle {
            stop,
            results: Some(receiver),
            worker: Some(worker),
        }
    }
}

/// Owning handle to a running session.
///
/// Results are pulled one at a time with [`next_result`](Self::next_result).
/// Dropping the handle stops the worker.
pub struct SessionHandle<C> {
    stop: Arc<AtomicBool>,
    results: Option<Receiver<Result<StepResult<C>, SolverError>>>,
    worker: Option<JoinHandle<()>>,
}

impl<C> SessionHandle<C> {
    /// Blocks for the next step outcome.
    ///
    /// Returns `None` once the worker has finished (converged, failed, or
    /// stopped) and the channel has drained.
    pub fn next_result(&mut self) -> Option<Result<StepResult<C>, SolverError>> {
        self.results.as_ref()?.recv().ok()
    }

    /// Requests a halt and waits for the worker to exit.
    ///
    /// The worker finishes its in-flight step at most; no further results
    /// are produced. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        // Dropping the receiver unblocks a worker parked on a rendezvous
        // send.
        self.results.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl<C> Drop for SessionHandle<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
