use soroban_sdk::{log, Address, Env, Error, InvokeError, TryFromVal, Val};

use crate::errors::MultisigError;
use crate::events::Executed;
use crate::storage;
use crate::store;
use crate::types::{Operation, Transaction, TransactionState};

/// Calls the controlled token contract.
///
/// A trap or contract error inside the token, or an explicit `false` return,
/// is reported as `DownstreamCallFailed`. Whatever the token wrote before
/// failing is discarded by the host.
pub fn invoke(env: &Env, operation: &Operation) -> Result<(), MultisigError> {
    let token = storage::token(env)?;

    match env.try_invoke_contract::<Val, Error>(
        &token,
        &operation.selector,
        operation.params.clone(),
    ) {
        Ok(Ok(value)) => {
            if let Ok(false) = bool::try_from_val(env, &value) {
                log!(env, "token call returned false", operation.selector.clone());
                return Err(MultisigError::DownstreamCallFailed);
            }
            Ok(())
        }
        Ok(Err(_)) => {
            log!(env, "token call returned an unreadable value", operation.selector.clone());
            Err(MultisigError::DownstreamCallFailed)
        }
        Err(Ok(err)) => {
            log!(env, "token call failed", operation.selector.clone(), err);
            Err(MultisigError::DownstreamCallFailed)
        }
        Err(Err(InvokeError::Contract(code))) => {
            log!(env, "token call failed", operation.selector.clone(), code);
            Err(MultisigError::DownstreamCallFailed)
        }
        Err(Err(InvokeError::Abort)) => {
            log!(env, "token call aborted", operation.selector.clone());
            Err(MultisigError::DownstreamCallFailed)
        }
    }
}

/// Seals a queued transaction and performs its call.
///
/// The `Executed` mark is written before the call so a re-entrant execute
/// sees a terminal state. If the call fails the error aborts the whole
/// invocation, which also rolls the mark back: the transaction stays
/// `Queued` and can be retried.
pub fn execute(
    env: &Env,
    executor: &Address,
    transaction: &mut Transaction,
) -> Result<(), MultisigError> {
    if transaction.state != TransactionState::Queued {
        return Err(MultisigError::InvalidState);
    }

    transaction.state = TransactionState::Executed;
    store::save(env, transaction);

    invoke(env, &transaction.operation)?;

    Executed {
        id: transaction.id.clone(),
        executor: executor.clone(),
        selector: transaction.operation.selector.clone(),
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);
    Ok(())
}
