use soroban_sdk::{Address, Env, Symbol};

use crate::errors::MultisigError;
use crate::events::{FunctionGranted, FunctionRevoked};
use crate::types::{ActorClass, DataKey};

fn key(class: ActorClass, selector: &Symbol) -> DataKey {
    match class {
        ActorClass::Signer => DataKey::SignerFunction(selector.clone()),
        ActorClass::FallbackAdmin => DataKey::FallbackAdminFunction(selector.clone()),
    }
}

/// Absence of an entry means "not permitted".
pub fn is_permitted(env: &Env, class: ActorClass, selector: &Symbol) -> bool {
    env.storage()
        .instance()
        .get(&key(class, selector))
        .unwrap_or(false)
}

/// Initial table entries. Written once by `initialize`, without events.
pub fn seed(env: &Env, class: ActorClass, selector: &Symbol) {
    env.storage().instance().set(&key(class, selector), &true);
}

pub fn grant(
    env: &Env,
    admin: &Address,
    class: ActorClass,
    selector: &Symbol,
) -> Result<(), MultisigError> {
    if is_permitted(env, class, selector) {
        return Err(MultisigError::FunctionAlreadyGranted);
    }
    env.storage().instance().set(&key(class, selector), &true);

    FunctionGranted {
        class,
        selector: selector.clone(),
        admin: admin.clone(),
    }
    .publish(env);
    Ok(())
}

pub fn revoke(
    env: &Env,
    admin: &Address,
    class: ActorClass,
    selector: &Symbol,
) -> Result<(), MultisigError> {
    if !is_permitted(env, class, selector) {
        return Err(MultisigError::FunctionNotGranted);
    }
    env.storage().instance().remove(&key(class, selector));

    FunctionRevoked {
        class,
        selector: selector.clone(),
        admin: admin.clone(),
    }
    .publish(env);
    Ok(())
}
