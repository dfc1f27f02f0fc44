//! Single-flight coordination for the session refresh cycle.
//!
//! State machine: Idle → Refreshing → (Succeeded | Failed) → Idle. The first
//! caller to [`RefreshGate::join`] becomes the leader and performs the one
//! refresh call; every later caller of the same cycle becomes a follower and
//! awaits the shared outcome. [`RefreshGate::settle`] fans the outcome out to
//! all followers and returns the gate to idle, making it eligible for a new
//! cycle on the next authentication failure.

use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

/// Waiters per cycle is bounded by in-flight requests; one message is ever
/// sent, so this only needs to cover simultaneous subscribers.
const FANOUT_CAPACITY: usize = 64;

/// Outcome of a refresh cycle: the new bearer token, or `None` on failure.
pub type RefreshOutcome = Option<String>;

/// Role handed to a caller that needs a refresh.
#[derive(Debug)]
pub enum RefreshTicket {
    /// First caller of this cycle: perform the refresh call, then `settle`.
    Leader,
    /// A refresh is already in flight: await the shared outcome.
    Follower(broadcast::Receiver<RefreshOutcome>),
}

/// Mutual exclusion for refresh cycles.
#[derive(Debug, Default)]
pub struct RefreshGate {
    inflight: Mutex<Option<broadcast::Sender<RefreshOutcome>>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the current cycle, starting one if the gate is idle.
    pub fn join(&self) -> RefreshTicket {
        let mut slot = self.lock();
        match slot.as_ref() {
            Some(sender) => RefreshTicket::Follower(sender.subscribe()),
            None => {
                let (sender, _) = broadcast::channel(FANOUT_CAPACITY);
                *slot = Some(sender);
                RefreshTicket::Leader
            }
        }
    }

    /// Deliver the cycle's outcome to every follower and return to idle.
    ///
    /// Only the leader calls this, exactly once per cycle.
    pub fn settle(&self, outcome: RefreshOutcome) {
        let sender = self.lock().take();
        if let Some(sender) = sender {
            // No receivers is fine: the leader was the only caller.
            let _ = sender.send(outcome);
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<broadcast::Sender<RefreshOutcome>>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Await a follower's copy of the cycle outcome.
///
/// A closed channel (leader gone without settling) degrades to failure.
pub async fn await_outcome(mut receiver: broadcast::Receiver<RefreshOutcome>) -> RefreshOutcome {
    receiver.recv().await.unwrap_or(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_join_is_leader_and_marks_refreshing() {
        let gate = RefreshGate::new();
        assert!(!gate.is_refreshing());
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        assert!(gate.is_refreshing());
    }

    #[test]
    fn joins_during_a_cycle_are_followers() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        assert!(matches!(gate.join(), RefreshTicket::Follower(_)));
        assert!(matches!(gate.join(), RefreshTicket::Follower(_)));
    }

    #[tokio::test]
    async fn followers_receive_the_settled_token() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));

        let tickets: Vec<_> = (0..3).map(|_| gate.join()).collect();
        gate.settle(Some("T2".to_string()));

        for ticket in tickets {
            match ticket {
                RefreshTicket::Follower(rx) => {
                    assert_eq!(await_outcome(rx).await.as_deref(), Some("T2"));
                }
                RefreshTicket::Leader => panic!("second leader within one cycle"),
            }
        }
    }

    #[tokio::test]
    async fn followers_observe_failure_as_none() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        let ticket = gate.join();
        gate.settle(None);
        match ticket {
            RefreshTicket::Follower(rx) => assert_eq!(await_outcome(rx).await, None),
            RefreshTicket::Leader => panic!("second leader within one cycle"),
        }
    }

    #[test]
    fn settle_returns_gate_to_idle_for_a_new_cycle() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        gate.settle(None);
        assert!(!gate.is_refreshing());
        // Next failure starts a fresh cycle with a new leader.
        assert!(matches!(gate.join(), RefreshTicket::Leader));
    }

    #[test]
    fn settle_without_followers_is_a_noop_delivery() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        gate.settle(Some("T2".to_string()));
        assert!(!gate.is_refreshing());
    }
}
