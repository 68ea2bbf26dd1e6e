use soroban_sdk::{contracttype, Address, BytesN, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Registry,
    Token,
    Config,
    TransactionCount,
    SignerFunction(Symbol),
    FallbackAdminFunction(Symbol),
    Transaction(BytesN<32>),
    TransactionExists(BytesN<32>),
    Approval(BytesN<32>, Address),
}

/// Lifecycle of a proposal. `Executed` and `Expired` are terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionState {
    /// Open for approval, nobody has approved yet.
    Pending = 0,
    /// Open for approval, a first approval has been recorded.
    Active = 1,
    /// Window elapsed with enough approvals; ready for one-shot execution.
    Queued = 2,
    /// Window elapsed without enough approvals.
    Expired = 3,
    Executed = 4,
}

impl TransactionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionState::Executed | TransactionState::Expired)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TransactionState::Pending | TransactionState::Active)
    }
}

/// Which class of actor proposed a transaction. Decides the expiry window
/// and which permission table entry is consulted.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ActorClass {
    Signer = 0,
    FallbackAdmin = 1,
}

/// An opaque call on the controlled token contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    pub selector: Symbol,
    pub params: Vec<Val>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: BytesN<32>,
    pub proposer: Address,
    pub operation: Operation,
    pub proposed_at: u64,
    /// Set once by the first approval and never cleared, not even when every
    /// approval is later revoked.
    pub first_approval_at: Option<u64>,
    pub approval_count: u32,
    pub state: TransactionState,
    pub origin: ActorClass,
}

/// Expiry windows in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WindowConfig {
    pub signer_window: u64,
    pub fallback_admin_window: u64,
}

/// Result of routing a standard operation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteOutcome {
    /// Super-admin bypass: the token was invoked immediately at this ledger
    /// timestamp and no proposal exists.
    Executed(u64),
    /// A proposal was created with this id.
    Proposed(BytesN<32>),
}
