//! Audit events. These are the durable observability surface of the
//! contract and their topics and fields are part of its public interface.

use soroban_sdk::{contractevent, Address, BytesN, Symbol};

use crate::types::{ActorClass, TransactionState};

#[contractevent(topics = ["multisig", "proposed"])]
pub struct Proposed {
    pub id: BytesN<32>,
    pub proposer: Address,
    pub origin: ActorClass,
    pub proposed_at: u64,
}

#[contractevent(topics = ["multisig", "approved"])]
pub struct Approved {
    pub id: BytesN<32>,
    pub signer: Address,
    pub approval_count: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["multisig", "revoked"])]
pub struct Revoked {
    pub id: BytesN<32>,
    pub signer: Address,
    pub approval_count: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["multisig", "executed"])]
pub struct Executed {
    pub id: BytesN<32>,
    pub executor: Address,
    pub selector: Symbol,
    pub timestamp: u64,
}

#[contractevent(topics = ["multisig", "expired"])]
pub struct Expired {
    pub id: BytesN<32>,
    pub timestamp: u64,
}

#[contractevent(topics = ["multisig", "state_changed"])]
pub struct StateChanged {
    pub id: BytesN<32>,
    pub from: TransactionState,
    pub to: TransactionState,
    pub timestamp: u64,
}

#[contractevent(topics = ["multisig", "insufficient_approvals"])]
pub struct InsufficientApprovals {
    pub id: BytesN<32>,
    pub approval_count: u32,
    pub total_signers: u32,
}

#[contractevent(topics = ["multisig", "function_granted"])]
pub struct FunctionGranted {
    pub class: ActorClass,
    pub selector: Symbol,
    pub admin: Address,
}

#[contractevent(topics = ["multisig", "function_revoked"])]
pub struct FunctionRevoked {
    pub class: ActorClass,
    pub selector: Symbol,
    pub admin: Address,
}

/// Super-admin bypass. No proposal is created, so this is the only trace.
#[contractevent(topics = ["multisig", "admin_executed"])]
pub struct AdminExecuted {
    pub admin: Address,
    pub selector: Symbol,
    pub timestamp: u64,
}
