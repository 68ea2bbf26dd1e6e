use soroban_sdk::{contractclient, Address, Env};

use crate::errors::MultisigError;
use crate::storage;
use crate::types::ActorClass;

/// Interface of the external role registry. The multisig never caches its
/// answers; signer membership and signer count are read at the moment they
/// are needed.
#[contractclient(name = "SignerRegistryClient")]
pub trait SignerRegistry {
    fn is_signer(env: Env, account: Address) -> bool;
    fn is_super_admin(env: Env, account: Address) -> bool;
    fn is_fallback_admin(env: Env, account: Address) -> bool;
    fn total_signers(env: Env) -> u32;
}

pub fn client(env: &Env) -> Result<SignerRegistryClient<'_>, MultisigError> {
    let registry = storage::registry(env)?;
    Ok(SignerRegistryClient::new(env, &registry))
}

pub fn require_signer(env: &Env, account: &Address) -> Result<(), MultisigError> {
    if client(env)?.is_signer(account) {
        Ok(())
    } else {
        Err(MultisigError::Unauthorized)
    }
}

pub fn require_super_admin(env: &Env, account: &Address) -> Result<(), MultisigError> {
    if client(env)?.is_super_admin(account) {
        Ok(())
    } else {
        Err(MultisigError::Unauthorized)
    }
}

/// Resolves the class an account proposes as. Signer wins when the account
/// holds both roles.
pub fn actor_class(env: &Env, account: &Address) -> Result<ActorClass, MultisigError> {
    let registry = client(env)?;
    if registry.is_signer(account) {
        Ok(ActorClass::Signer)
    } else if registry.is_fallback_admin(account) {
        Ok(ActorClass::FallbackAdmin)
    } else {
        Err(MultisigError::Unauthorized)
    }
}
