use std::sync::mpsc;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Scheduling services supplied by the host runtime.
///
/// `run_foreground` must execute the task on the thread that owns the web
/// view and must not return until the task has run; callers rely on that to
/// report success only after the foreground step actually happened.
pub trait HostContext: Send + Sync {
    fn run_background(&self, task: Task);
    fn run_foreground(&self, task: Task);
}

/// Runs everything inline on the caller's thread.
pub struct DirectHost;

impl HostContext for DirectHost {
    fn run_background(&self, task: Task) {
        task();
    }

    fn run_foreground(&self, task: Task) {
        task();
    }
}

struct ForegroundTask {
    task: Task,
    done: mpsc::Sender<()>,
}

/// Background work on spawned worker threads, foreground work shipped to one
/// long-lived dispatcher thread. `run_foreground` blocks on an ack channel
/// until the dispatcher has run the task.
pub struct ThreadHost {
    fg_tx: mpsc::Sender<ForegroundTask>,
}

impl ThreadHost {
    pub fn new() -> Self {
        let (fg_tx, fg_rx) = mpsc::channel::<ForegroundTask>();
        std::thread::spawn(move || {
            for fg in fg_rx {
                (fg.task)();
                let _ = fg.done.send(());
            }
        });
        Self { fg_tx }
    }
}

impl Default for ThreadHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostContext for ThreadHost {
    fn run_background(&self, task: Task) {
        std::thread::spawn(task);
    }

    fn run_foreground(&self, task: Task) {
        let (done_tx, done_rx) = mpsc::channel();
        let sent = self.fg_tx.send(ForegroundTask {
            task,
            done: done_tx,
        });
        if sent.is_ok() {
            // Wait for the dispatcher to finish the task. A dropped sender
            // (dispatcher thread gone) unblocks us with an error we ignore.
            let _ = done_rx.recv();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn direct_host_runs_inline() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        DirectHost.run_foreground(Box::new(move || flag.store(true, Ordering::SeqCst)));
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn thread_host_foreground_completes_before_returning() {
        let host = ThreadHost::new();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        host.run_foreground(Box::new(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            flag.store(true, Ordering::SeqCst);
        }));
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn thread_host_foreground_tasks_share_one_thread() {
        let host = ThreadHost::new();
        let (tx, rx) = mpsc::channel();
        for _ in 0..2 {
            let tx = tx.clone();
            host.run_foreground(Box::new(move || {
                let _ = tx.send(std::thread::current().id());
            }));
        }
        let first = rx.recv().unwrap();
        let second = rx.recv().unwrap();
        assert_eq!(first, second);
    }
}
