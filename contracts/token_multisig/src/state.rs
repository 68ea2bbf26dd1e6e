//! Lazy lifecycle derivation.
//!
//! Nothing is scheduled: a proposal's state is recomputed from the ledger
//! clock, its approval count and the live signer count every time it is read
//! or mutated, and the result is written back only when it changed.

use soroban_sdk::{log, Env};

use crate::errors::MultisigError;
use crate::events::{Expired, InsufficientApprovals, StateChanged};
use crate::registry;
use crate::storage;
use crate::store;
use crate::types::{ActorClass, Transaction, TransactionState, WindowConfig};

/// Minimum share of all signers, in percent, that must have approved when
/// the window closes. Evaluated with integer (floor) division.
pub const APPROVAL_THRESHOLD: u64 = 60;

/// The last timestamp at which the proposal is still open for approval.
///
/// Fallback-admin proposals get the longer window, but once a signer has
/// approved they are also bound by a signer window counted from that first
/// approval, whichever ends first.
pub fn deadline(transaction: &Transaction, config: &WindowConfig) -> u64 {
    match transaction.origin {
        ActorClass::Signer => transaction
            .proposed_at
            .saturating_add(config.signer_window),
        ActorClass::FallbackAdmin => {
            let deadline = transaction
                .proposed_at
                .saturating_add(config.fallback_admin_window);
            match transaction.first_approval_at {
                Some(first) => deadline.min(first.saturating_add(config.signer_window)),
                None => deadline,
            }
        }
    }
}

pub fn meets_threshold(approval_count: u32, total_signers: u32) -> Result<bool, MultisigError> {
    if total_signers == 0 {
        return Err(MultisigError::NoSigners);
    }
    Ok(u64::from(approval_count) * 100 / u64::from(total_signers) >= APPROVAL_THRESHOLD)
}

/// Pure state derivation.
///
/// `Queued` is never re-evaluated: approvals are frozen once the window
/// closes, and a later change in the signer count must not move a queued
/// proposal backwards to `Expired`.
pub fn derive_state(
    transaction: &Transaction,
    now: u64,
    total_signers: u32,
    config: &WindowConfig,
) -> Result<TransactionState, MultisigError> {
    if transaction.state.is_terminal() || transaction.state == TransactionState::Queued {
        return Ok(transaction.state);
    }

    if now > deadline(transaction, config) {
        if meets_threshold(transaction.approval_count, total_signers)? {
            Ok(TransactionState::Queued)
        } else {
            Ok(TransactionState::Expired)
        }
    } else if transaction.first_approval_at.is_some() {
        Ok(TransactionState::Active)
    } else {
        Ok(transaction.state)
    }
}

/// Brings `transaction` up to date, persisting and announcing any change.
pub fn refresh(env: &Env, transaction: &mut Transaction) -> Result<TransactionState, MultisigError> {
    if transaction.state.is_terminal() || transaction.state == TransactionState::Queued {
        return Ok(transaction.state);
    }

    let now = env.ledger().timestamp();
    let config = storage::config(env)?;
    let total_signers = registry::client(env)?.total_signers();
    let next = derive_state(transaction, now, total_signers, &config)?;

    if next != transaction.state {
        let previous = transaction.state;
        transaction.state = next;
        store::save(env, transaction);

        log!(env, "transaction state changed", transaction.id.clone(), next as u32);
        StateChanged {
            id: transaction.id.clone(),
            from: previous,
            to: next,
            timestamp: now,
        }
        .publish(env);

        if next == TransactionState::Expired {
            InsufficientApprovals {
                id: transaction.id.clone(),
                approval_count: transaction.approval_count,
                total_signers,
            }
            .publish(env);
            Expired {
                id: transaction.id.clone(),
                timestamp: now,
            }
            .publish(env);
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, BytesN, Symbol, Vec};

    use crate::types::Operation;

    const SIGNER_WINDOW: u64 = 86_400;
    const FALLBACK_WINDOW: u64 = 3 * 86_400;

    fn config() -> WindowConfig {
        WindowConfig {
            signer_window: SIGNER_WINDOW,
            fallback_admin_window: FALLBACK_WINDOW,
        }
    }

    fn transaction(env: &Env, origin: ActorClass) -> Transaction {
        Transaction {
            id: BytesN::from_array(env, &[7u8; 32]),
            proposer: Address::generate(env),
            operation: Operation {
                selector: Symbol::new(env, "pause"),
                params: Vec::new(env),
            },
            proposed_at: 1_000,
            first_approval_at: None,
            approval_count: 0,
            state: TransactionState::Pending,
            origin,
        }
    }

    #[test]
    fn threshold_uses_floor_division() {
        assert_eq!(meets_threshold(3, 5), Ok(true));
        assert_eq!(meets_threshold(2, 5), Ok(false));
        // 2 * 100 / 3 = 66
        assert_eq!(meets_threshold(2, 3), Ok(true));
        // 5 * 100 / 9 = 55
        assert_eq!(meets_threshold(5, 9), Ok(false));
        assert_eq!(meets_threshold(6, 10), Ok(true));
        assert_eq!(meets_threshold(0, 0), Err(MultisigError::NoSigners));
    }

    #[test]
    fn pending_stays_pending_inside_window() {
        let env = Env::default();
        let tx = transaction(&env, ActorClass::Signer);
        let state = derive_state(&tx, 1_000 + SIGNER_WINDOW, 5, &config());
        assert_eq!(state, Ok(TransactionState::Pending));
    }

    #[test]
    fn first_approval_makes_active() {
        let env = Env::default();
        let mut tx = transaction(&env, ActorClass::Signer);
        tx.first_approval_at = Some(1_500);
        tx.approval_count = 1;
        assert_eq!(derive_state(&tx, 2_000, 5, &config()), Ok(TransactionState::Active));
    }

    #[test]
    fn window_close_decides_queue_or_expire() {
        let env = Env::default();
        let mut tx = transaction(&env, ActorClass::Signer);
        tx.first_approval_at = Some(1_500);
        let after = 1_000 + SIGNER_WINDOW + 1;

        tx.approval_count = 3;
        assert_eq!(derive_state(&tx, after, 5, &config()), Ok(TransactionState::Queued));

        tx.approval_count = 2;
        assert_eq!(derive_state(&tx, after, 5, &config()), Ok(TransactionState::Expired));
    }

    #[test]
    fn zero_signers_only_fails_at_evaluation() {
        let env = Env::default();
        let tx = transaction(&env, ActorClass::Signer);
        assert_eq!(derive_state(&tx, 1_001, 0, &config()), Ok(TransactionState::Pending));
        assert_eq!(
            derive_state(&tx, 1_000 + SIGNER_WINDOW + 1, 0, &config()),
            Err(MultisigError::NoSigners)
        );
    }

    #[test]
    fn terminal_and_queued_states_are_sticky() {
        let env = Env::default();
        let mut tx = transaction(&env, ActorClass::Signer);
        let late = 1_000 + SIGNER_WINDOW * 10;

        for state in [
            TransactionState::Executed,
            TransactionState::Expired,
            TransactionState::Queued,
        ] {
            tx.state = state;
            assert_eq!(derive_state(&tx, late, 100, &config()), Ok(state));
        }
    }

    #[test]
    fn fallback_window_without_approval() {
        let env = Env::default();
        let tx = transaction(&env, ActorClass::FallbackAdmin);

        assert_eq!(deadline(&tx, &config()), 1_000 + FALLBACK_WINDOW);
        assert_eq!(
            derive_state(&tx, 1_000 + SIGNER_WINDOW + 1, 5, &config()),
            Ok(TransactionState::Pending)
        );
        assert_eq!(
            derive_state(&tx, 1_000 + FALLBACK_WINDOW + 1, 5, &config()),
            Ok(TransactionState::Expired)
        );
    }

    #[test]
    fn fallback_window_capped_by_first_approval() {
        let env = Env::default();
        let mut tx = transaction(&env, ActorClass::FallbackAdmin);

        // Approved early: the signer window from the first approval ends first.
        tx.first_approval_at = Some(2_000);
        assert_eq!(deadline(&tx, &config()), 2_000 + SIGNER_WINDOW);

        // Approved late: the fallback window still bounds the proposal.
        tx.first_approval_at = Some(1_000 + FALLBACK_WINDOW - 10);
        assert_eq!(deadline(&tx, &config()), 1_000 + FALLBACK_WINDOW);
    }
}
