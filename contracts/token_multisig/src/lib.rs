#![no_std]

mod errors;
mod events;
mod executor;
mod multisig;
pub mod operations;
mod permissions;
mod registry;
mod state;
mod storage;
mod store;
mod types;

pub use errors::MultisigError;
pub use multisig::{TokenMultisig, TokenMultisigClient};
pub use registry::{SignerRegistry, SignerRegistryClient};
pub use state::APPROVAL_THRESHOLD;
pub use storage::{MAX_WINDOW, MIN_WINDOW};
pub use types::{
    ActorClass, Operation, RouteOutcome, Transaction, TransactionState, WindowConfig,
};

#[cfg(test)]
mod mock;
