//! Lifecycle state machines.
//!
//! Each stateful record owns an enum of its statuses and a fixed table of
//! allowed successors. A status with no successors is terminal.
use crate::error::TransitionError;
use std::collections::BTreeSet;
use std::fmt::Debug;

pub trait Lifecycle: Copy + Eq + Ord + Debug + 'static {
    /// Record type named in rejection messages
    const ENTITY: &'static str;
    const ALL: &'static [Self];
    /// Wire names, in the same order as `ALL`
    const NAMES: &'static [&'static str];
    const INITIAL: Self;

    fn as_str(self) -> &'static str;
    fn successors(self) -> &'static [Self];

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == value)
    }
    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

/// Parse a requested status, rejecting anything outside the enumeration.
pub fn parse_target<S: Lifecycle>(requested: &str) -> Result<S, TransitionError> {
    S::parse(requested).ok_or_else(|| TransitionError::InvalidTarget {
        entity: S::ENTITY,
        requested: requested.to_string(),
        allowed: S::NAMES,
    })
}

/// Check a requested status change against the table, returning the parsed target.
pub fn validate_transition<S: Lifecycle>(current: &str, requested: &str) -> Result<S, TransitionError> {
    let target = parse_target::<S>(requested)?;
    if current == requested {
        return Err(TransitionError::AlreadyInStatus {
            entity: S::ENTITY,
            status: current.to_string(),
        });
    }
    // an unknown stored status has no table entry either
    let from = match S::parse(current) {
        Some(from) if !from.is_terminal() => from,
        _ => {
            return Err(TransitionError::Terminal {
                entity: S::ENTITY,
                status: current.to_string(),
            });
        }
    };
    if !from.successors().contains(&target) {
        return Err(TransitionError::NotPermitted {
            entity: S::ENTITY,
            from: current.to_string(),
            to: requested.to_string(),
        });
    }
    Ok(target)
}

/// Every status reachable from `S::INITIAL` through allowed transitions, initial included.
pub fn reachable<S: Lifecycle>() -> BTreeSet<S> {
    let mut seen = BTreeSet::from([S::INITIAL]);
    let mut frontier = vec![S::INITIAL];
    while let Some(status) = frontier.pop() {
        for next in status.successors() {
            if seen.insert(*next) {
                frontier.push(*next);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChargeStatus, SettlementStatus, TagStatus};

    fn names_match<S: Lifecycle>() {
        let names: Vec<&str> = S::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, S::NAMES);
    }

    #[test]
    fn wire_names_follow_enum_order() {
        names_match::<TagStatus>();
        names_match::<ChargeStatus>();
        names_match::<SettlementStatus>();
    }

    #[test]
    fn rejection_order() {
        assert!(matches!(
            validate_transition::<ChargeStatus>("pending", "archived"),
            Err(TransitionError::InvalidTarget { .. })
        ));
        assert!(matches!(
            validate_transition::<ChargeStatus>("settled", "settled"),
            Err(TransitionError::AlreadyInStatus { .. })
        ));
        assert!(matches!(
            validate_transition::<ChargeStatus>("settled", "posted"),
            Err(TransitionError::Terminal { .. })
        ));
        assert!(matches!(
            validate_transition::<ChargeStatus>("pending", "settled"),
            Err(TransitionError::NotPermitted { .. })
        ));
        assert_eq!(
            validate_transition::<ChargeStatus>("pending", "posted"),
            Ok(ChargeStatus::Posted)
        );
    }

    #[test]
    fn corrupt_current_status_is_terminal() {
        assert!(matches!(
            validate_transition::<TagStatus>("bogus", "valid"),
            Err(TransitionError::Terminal { .. })
        ));
    }

    #[test]
    fn settlement_reaches_every_status() {
        let all: BTreeSet<SettlementStatus> = SettlementStatus::ALL.iter().copied().collect();
        assert_eq!(reachable::<SettlementStatus>(), all);
    }
}
