//! Encoders for the standard operations on the controlled token. Each
//! selector is the name of the function invoked on the token contract.

use soroban_sdk::{symbol_short, vec, Address, BytesN, Env, IntoVal, Symbol, Vec};

use crate::types::Operation;

pub const MINT: Symbol = symbol_short!("mint");
pub const BURN: Symbol = symbol_short!("burn");
pub const PAUSE: Symbol = symbol_short!("pause");
pub const UNPAUSE: Symbol = symbol_short!("unpause");
pub const BLACKLIST: Symbol = symbol_short!("blacklist");
pub const UPGRADE: Symbol = symbol_short!("upgrade");

pub fn unblacklist_selector(env: &Env) -> Symbol {
    Symbol::new(env, "unblacklist")
}

pub fn recover_token_selector(env: &Env) -> Symbol {
    Symbol::new(env, "recover_token")
}

pub fn mint(env: &Env, to: Address, amount: i128) -> Operation {
    Operation {
        selector: MINT,
        params: vec![env, to.into_val(env), amount.into_val(env)],
    }
}

pub fn burn(env: &Env, from: Address, amount: i128) -> Operation {
    Operation {
        selector: BURN,
        params: vec![env, from.into_val(env), amount.into_val(env)],
    }
}

pub fn pause(env: &Env) -> Operation {
    Operation {
        selector: PAUSE,
        params: Vec::new(env),
    }
}

pub fn unpause(env: &Env) -> Operation {
    Operation {
        selector: UNPAUSE,
        params: Vec::new(env),
    }
}

pub fn blacklist(env: &Env, account: Address) -> Operation {
    Operation {
        selector: BLACKLIST,
        params: vec![env, account.into_val(env)],
    }
}

pub fn unblacklist(env: &Env, account: Address) -> Operation {
    Operation {
        selector: unblacklist_selector(env),
        params: vec![env, account.into_val(env)],
    }
}

/// Moves `amount` of a foreign `asset` held by the token contract to `to`.
pub fn recover_token(env: &Env, asset: Address, to: Address, amount: i128) -> Operation {
    Operation {
        selector: recover_token_selector(env),
        params: vec![
            env,
            asset.into_val(env),
            to.into_val(env),
            amount.into_val(env),
        ],
    }
}

pub fn upgrade(env: &Env, new_wasm_hash: BytesN<32>) -> Operation {
    Operation {
        selector: UPGRADE,
        params: vec![env, new_wasm_hash.into_val(env)],
    }
}
