use soroban_sdk::{Address, Env};

use crate::errors::MultisigError;
use crate::types::{DataKey, WindowConfig};

/// Bounds on a configurable expiry window, in seconds.
pub const MIN_WINDOW: u64 = 3_600; // 1 hour
pub const MAX_WINDOW: u64 = 2_592_000; // 30 days

// Persistent entries are bumped on every write so proposals outlive their
// window as audit records. Ledger counts at ~5s per ledger.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(MultisigError::NotInitialized)
    }
}

pub fn validate_config(config: &WindowConfig) -> Result<(), MultisigError> {
    let in_bounds = |window: u64| (MIN_WINDOW..=MAX_WINDOW).contains(&window);

    if !in_bounds(config.signer_window) || !in_bounds(config.fallback_admin_window) {
        return Err(MultisigError::InvalidWindow);
    }
    if config.fallback_admin_window < config.signer_window {
        return Err(MultisigError::InvalidWindow);
    }
    Ok(())
}

pub fn initialize(env: &Env, registry: &Address, token: &Address, config: &WindowConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Registry, registry);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::TransactionCount, &0u64);
}

pub fn registry(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(MultisigError::NotInitialized)
}

pub fn token(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(MultisigError::NotInitialized)
}

pub fn config(env: &Env) -> Result<WindowConfig, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(MultisigError::NotInitialized)
}

pub fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub fn increment_transaction_count(env: &Env) {
    let count = transaction_count(env);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(count + 1));
}

pub(crate) fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_TTL_THRESHOLD,
        PERSISTENT_TTL_EXTEND_TO,
    );
}
