use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// The armed callback, either a runtime task or a sleeping thread.
///
#[derive(Debug)]
enum Pending {
    Task(JoinHandle<()>),
    Thread {
        cancelled: Arc<AtomicBool>,
        handle: thread::JoinHandle<()>,
    },
}

/// A cancellable one-shot timer.
///
/// Scheduling while a callback is pending cancels the pending one first, so
/// at most one callback is armed at a time. Inside a tokio runtime the wait
/// is a task; outside of one it is a thread that checks a cancel flag once
/// it wakes.
#[derive(Debug, Default)]
pub struct OneShotTimer {
    pending: Option<Pending>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        OneShotTimer { pending: None }
    }

    /// Run `callback` once after `delay`, replacing any pending callback.
    ///
    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let pending = match Handle::try_current() {
            Ok(runtime) => Pending::Task(runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            })),
            Err(_) => {
                debug!("No async runtime available, waiting on a thread");
                let cancelled = Arc::new(AtomicBool::new(false));
                let flag = Arc::clone(&cancelled);
                let handle = thread::spawn(move || {
                    thread::sleep(delay);
                    if !flag.load(Ordering::SeqCst) {
                        callback();
                    }
                });
                Pending::Thread { cancelled, handle }
            }
        };
        self.pending = Some(pending);
    }

    /// Drop the pending callback, if any.
    ///
    pub fn cancel(&mut self) {
        match self.pending.take() {
            Some(Pending::Task(handle)) => handle.abort(),
            Some(Pending::Thread { cancelled, .. }) => cancelled.store(true, Ordering::SeqCst),
            None => (),
        }
    }

    /// Return true if a callback is armed and has not run yet.
    ///
    pub fn is_pending(&self) -> bool {
        match &self.pending {
            Some(Pending::Task(handle)) => !handle.is_finished(),
            Some(Pending::Thread { cancelled, handle }) => {
                !cancelled.load(Ordering::SeqCst) && !handle.is_finished()
            }
            None => false,
        }
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
