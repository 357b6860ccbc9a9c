//! Timer-driven reveal runs.
//!
//! Each run owns exactly one tokio task, which holds the `RevealState` and
//! sleeps until the next character is due. The run publishes through its own
//! watch channel, so once a run is dropped nothing it does can reach the
//! `RevealText` that owned it.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use super::{RevealParams, RevealState};

/// What a reader sees of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RevealSnapshot {
    revealed: String,
    cursor: usize,
}

/// A live reveal of one string.
///
/// Must be created inside a tokio runtime. Dropping it cancels the pending tick.
#[derive(Debug)]
pub struct RevealText {
    params: RevealParams,
    len: usize,
    run: Option<RevealRun>,
    /// Last published state, kept after `dispose()`.
    frozen: RevealSnapshot,
}

impl RevealText {
    /// Starts a run; the clock starts now.
    pub fn start(params: RevealParams) -> Self {
        let len = params.target.chars().count();
        let run = RevealRun::spawn(&params);
        Self {
            params,
            len,
            run: Some(run),
            frozen: RevealSnapshot::default(),
        }
    }

    /// Starts a run from millisecond values (negatives clamp to zero).
    pub fn from_millis(target: impl Into<String>, delay_ms: f64, step_ms: f64) -> Self {
        Self::start(RevealParams::from_millis(target, delay_ms, step_ms))
    }

    /// Re-supplies parameters.
    ///
    /// Unchanged params leave the run untouched. Changed params cancel the
    /// pending tick before returning and start a fresh run from cursor 0.
    /// Returns whether a reset happened.
    pub fn set(&mut self, params: RevealParams) -> bool {
        if params == self.params && self.run.is_some() {
            return false;
        }
        self.run = None;
        self.len = params.target.chars().count();
        self.frozen = RevealSnapshot::default();
        self.run = Some(RevealRun::spawn(&params));
        self.params = params;
        true
    }

    /// Stops the run. The revealed text stays frozen at its current value.
    pub fn dispose(&mut self) {
        if let Some(run) = self.run.take() {
            run.cancel.cancel();
            self.frozen = run.rx.borrow().clone();
        }
    }

    /// The currently revealed prefix.
    pub fn revealed(&self) -> String {
        match &self.run {
            Some(run) => run.rx.borrow().revealed.clone(),
            None => self.frozen.revealed.clone(),
        }
    }

    pub fn cursor(&self) -> usize {
        match &self.run {
            Some(run) => run.rx.borrow().cursor,
            None => self.frozen.cursor,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor() >= self.len
    }

    /// True while characters are still scheduled.
    pub fn is_running(&self) -> bool {
        self.run.is_some() && !self.is_complete()
    }

    /// Waits for the revealed text to change.
    ///
    /// Returns `false` once the run has finished (or was disposed) and every
    /// change has been observed.
    pub async fn changed(&mut self) -> bool {
        match self.run.as_mut() {
            Some(run) => run.rx.changed().await.is_ok(),
            None => false,
        }
    }
}

/// One run: the task, its cancel token and the receiving end of its channel.
#[derive(Debug)]
struct RevealRun {
    rx: watch::Receiver<RevealSnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RevealRun {
    fn spawn(params: &RevealParams) -> Self {
        let started = Instant::now();
        let state = RevealState::new(params);
        let (tx, rx) = watch::channel(RevealSnapshot::default());
        let cancel = CancellationToken::new();
        let task = (!state.is_complete())
            .then(|| tokio::spawn(drive(state, tx, cancel.clone(), started)));
        Self { rx, cancel, task }
    }
}

impl Drop for RevealRun {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn drive(
    mut state: RevealState,
    tx: watch::Sender<RevealSnapshot>,
    cancel: CancellationToken,
    started: Instant,
) {
    while let Some(due) = state.next_due() {
        let Some(deadline) = started.checked_add(due) else {
            // Unreachable deadline: the run only ends by cancellation.
            cancel.cancelled().await;
            return;
        };
        tokio::select! {
            biased;
            () = cancel.cancelled() => return,
            () = sleep_until(deadline) => {}
        }
        if cancel.is_cancelled() || tx.is_closed() {
            return;
        }
        if state.tick().is_none() {
            break;
        }
        tx.send_replace(RevealSnapshot {
            revealed: state.revealed().to_string(),
            cursor: state.cursor(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Lets spawned reveal tasks run without moving the paused clock.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hi_reveals_h_at_zero_and_hi_at_ten() {
        let reveal = RevealText::start(RevealParams::new("Hi", ms(0), ms(10)));
        assert!(reveal.cursor() <= 1);

        settle().await;
        assert_eq!(reveal.revealed(), "H");

        sleep(ms(5)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "H");

        sleep(ms(10)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "Hi");
        assert!(reveal.is_complete());
        assert!(!reveal.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_target_is_complete_with_no_task() {
        let mut reveal = RevealText::start(RevealParams::new("", ms(50), ms(50)));
        assert!(reveal.is_complete());
        assert!(reveal.run.as_ref().is_some_and(|run| run.task.is_none()));

        sleep(ms(500)).await;
        assert_eq!(reveal.revealed(), "");
        assert!(!reveal.changed().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_step_reveals_both_at_delay_in_order() {
        let mut reveal = RevealText::start(RevealParams::new("AB", ms(5), ms(0)));

        sleep(ms(4)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "");

        let mut seen = Vec::new();
        while reveal.changed().await {
            seen.push(reveal.revealed());
        }
        assert_eq!(seen.last().map(String::as_str), Some("AB"));
        for value in &seen {
            assert!("AB".starts_with(value.as_str()));
        }
        for pair in seen.windows(2) {
            assert!(pair[0].len() < pair[1].len());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_changing_target_mid_run_resets() {
        let mut reveal = RevealText::start(RevealParams::new("ABC", ms(0), ms(10)));
        settle().await;
        assert_eq!(reveal.revealed(), "A");
        assert_eq!(reveal.cursor(), 1);

        let reset = reveal.set(RevealParams::new("XYZ", ms(0), ms(10)));
        assert!(reset);
        assert_eq!(reveal.revealed(), "");

        settle().await;
        assert_eq!(reveal.revealed(), "X");

        sleep(ms(25)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "XYZ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_clock() {
        let mut reveal = RevealText::start(RevealParams::new("abc", ms(0), ms(10)));
        sleep(ms(15)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "ab");

        reveal.set(RevealParams::new("abc", ms(20), ms(10)));
        sleep(ms(15)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "");

        sleep(ms(10)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "a");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_params_do_not_reset() {
        let params = RevealParams::new("abcd", ms(0), ms(10));
        let mut reveal = RevealText::start(params.clone());
        sleep(ms(15)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "ab");

        assert!(!reveal.set(params));
        assert_eq!(reveal.revealed(), "ab");

        sleep(ms(10)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_freezes_state() {
        let mut reveal = RevealText::start(RevealParams::new("abc", ms(0), ms(10)));
        settle().await;
        assert_eq!(reveal.revealed(), "a");

        reveal.dispose();
        sleep(ms(100)).await;
        settle().await;
        assert_eq!(reveal.revealed(), "a");
        assert_eq!(reveal.cursor(), 1);
        assert!(!reveal.is_running());
        assert!(!reveal.changed().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_tick() {
        let reveal = RevealText::start(RevealParams::new("abc", ms(10), ms(10)));
        let cancel = reveal
            .run
            .as_ref()
            .map(|run| run.cancel.clone())
            .expect("run is live");
        assert!(!cancel.is_cancelled());

        drop(reveal);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_reveals_full_string() {
        for target in ["Kotoba+", "A sleek app that counts characters.", "2025"] {
            let mut reveal = RevealText::start(RevealParams::from_millis(target, 2.5, 0.3));
            while reveal.changed().await {}
            assert_eq!(reveal.revealed(), target);
            assert_eq!(reveal.cursor(), target.chars().count());
        }
    }
}
