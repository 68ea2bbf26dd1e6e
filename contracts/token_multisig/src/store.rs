//! Proposal store: transaction records, the existence index, the
//! per-signer approval index and the content-derived id scheme.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::errors::MultisigError;
use crate::storage;
use crate::types::{DataKey, Operation, Transaction};

/// `sha256(timestamp || proposer || selector || params)`.
///
/// Identical proposals from the same proposer within the same ledger second
/// collide, which is what rejects duplicate submissions.
pub fn transaction_id(
    env: &Env,
    proposed_at: u64,
    proposer: &Address,
    operation: &Operation,
) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &proposed_at.to_be_bytes());
    preimage.append(&proposer.clone().to_xdr(env));
    preimage.append(&operation.selector.clone().to_xdr(env));
    preimage.append(&operation.params.clone().to_xdr(env));
    env.crypto().sha256(&preimage).into()
}

pub fn exists(env: &Env, id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::TransactionExists(id.clone()))
        .unwrap_or(false)
}

/// Inserts a new record. The existence flag and the record are written in
/// the same invocation, so neither is ever visible without the other.
pub fn insert(env: &Env, transaction: &Transaction) -> Result<(), MultisigError> {
    if exists(env, &transaction.id) {
        return Err(MultisigError::TransactionAlreadyExists);
    }

    let exists_key = DataKey::TransactionExists(transaction.id.clone());
    env.storage().persistent().set(&exists_key, &true);
    storage::bump_persistent(env, &exists_key);

    save(env, transaction);
    storage::increment_transaction_count(env);
    Ok(())
}

pub fn load(env: &Env, id: &BytesN<32>) -> Result<Transaction, MultisigError> {
    if !exists(env, id) {
        return Err(MultisigError::TransactionNotFound);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(id.clone()))
        .ok_or(MultisigError::TransactionNotFound)
}

pub fn save(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id.clone());
    env.storage().persistent().set(&key, transaction);
    storage::bump_persistent(env, &key);
}

pub fn has_approved(env: &Env, id: &BytesN<32>, signer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approval(id.clone(), signer.clone()))
        .unwrap_or(false)
}

pub fn set_approval(env: &Env, id: &BytesN<32>, signer: &Address, approved: bool) {
    let key = DataKey::Approval(id.clone(), signer.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        storage::bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
