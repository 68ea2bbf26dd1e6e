use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Symbol, Vec,
};

use crate::errors::MultisigError;
use crate::events::{AdminExecuted, Approved, Proposed, Revoked};
use crate::executor;
use crate::operations;
use crate::permissions;
use crate::registry;
use crate::state;
use crate::storage;
use crate::store;
use crate::types::{
    ActorClass, Operation, RouteOutcome, Transaction, TransactionState, WindowConfig,
};

#[contract]
pub struct TokenMultisig;

/// Unwraps an internal result or aborts the invocation with the error code.
/// Aborting rolls back every write and event of the call.
fn ok_or_panic<T>(env: &Env, result: Result<T, MultisigError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}

#[contractimpl]
impl TokenMultisig {
    pub fn initialize(
        env: Env,
        registry: Address,
        token: Address,
        config: WindowConfig,
        signer_functions: Vec<Symbol>,
        fallback_admin_functions: Vec<Symbol>,
    ) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, MultisigError::AlreadyInitialized);
        }
        ok_or_panic(&env, storage::validate_config(&config));

        storage::initialize(&env, &registry, &token, &config);

        for selector in signer_functions.iter() {
            permissions::seed(&env, ActorClass::Signer, &selector);
        }
        for selector in fallback_admin_functions.iter() {
            permissions::seed(&env, ActorClass::FallbackAdmin, &selector);
        }
        log!(&env, "multisig initialized", registry, token);
    }

    // ---------------------------------------------------------------------
    // Permission table
    // ---------------------------------------------------------------------

    pub fn grant_function(env: Env, admin: Address, class: ActorClass, selector: Symbol) {
        ok_or_panic(&env, storage::require_initialized(&env));
        admin.require_auth();
        ok_or_panic(&env, registry::require_super_admin(&env, &admin));
        ok_or_panic(&env, permissions::grant(&env, &admin, class, &selector));
    }

    pub fn revoke_function(env: Env, admin: Address, class: ActorClass, selector: Symbol) {
        ok_or_panic(&env, storage::require_initialized(&env));
        admin.require_auth();
        ok_or_panic(&env, registry::require_super_admin(&env, &admin));
        ok_or_panic(&env, permissions::revoke(&env, &admin, class, &selector));
    }

    pub fn is_function_permitted(env: Env, class: ActorClass, selector: Symbol) -> bool {
        permissions::is_permitted(&env, class, &selector)
    }

    // ---------------------------------------------------------------------
    // Routing and proposal creation
    // ---------------------------------------------------------------------

    /// Super-admins execute immediately; everyone else creates a proposal.
    pub fn route_operation(env: Env, caller: Address, operation: Operation) -> RouteOutcome {
        ok_or_panic(&env, storage::require_initialized(&env));
        caller.require_auth();
        ok_or_panic(&env, Self::route(&env, &caller, operation))
    }

    pub fn create_transaction(env: Env, caller: Address, operation: Operation) -> BytesN<32> {
        ok_or_panic(&env, storage::require_initialized(&env));
        caller.require_auth();
        ok_or_panic(&env, Self::propose(&env, &caller, operation))
    }

    pub fn compute_transaction_id(env: Env, proposer: Address, operation: Operation) -> BytesN<32> {
        store::transaction_id(&env, env.ledger().timestamp(), &proposer, &operation)
    }

    // ---------------------------------------------------------------------
    // Approvals
    // ---------------------------------------------------------------------

    pub fn approve(env: Env, signer: Address, id: BytesN<32>) {
        ok_or_panic(&env, storage::require_initialized(&env));
        signer.require_auth();
        ok_or_panic(&env, Self::do_approve(&env, &signer, &id));
    }

    pub fn revoke(env: Env, signer: Address, id: BytesN<32>) {
        ok_or_panic(&env, storage::require_initialized(&env));
        signer.require_auth();
        ok_or_panic(&env, Self::do_revoke(&env, &signer, &id));
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Anyone may execute a queued transaction, exactly once.
    pub fn execute(env: Env, caller: Address, id: BytesN<32>) {
        ok_or_panic(&env, storage::require_initialized(&env));
        caller.require_auth();

        let mut transaction = ok_or_panic(&env, store::load(&env, &id));
        ok_or_panic(&env, state::refresh(&env, &mut transaction));
        ok_or_panic(&env, executor::execute(&env, &caller, &mut transaction));
    }

    // ---------------------------------------------------------------------
    // Standard token operations
    // ---------------------------------------------------------------------

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> RouteOutcome {
        let operation = operations::mint(&env, to, amount);
        Self::route_operation(env, caller, operation)
    }

    pub fn burn(env: Env, caller: Address, from: Address, amount: i128) -> RouteOutcome {
        let operation = operations::burn(&env, from, amount);
        Self::route_operation(env, caller, operation)
    }

    pub fn pause(env: Env, caller: Address) -> RouteOutcome {
        let operation = operations::pause(&env);
        Self::route_operation(env, caller, operation)
    }

    pub fn unpause(env: Env, caller: Address) -> RouteOutcome {
        let operation = operations::unpause(&env);
        Self::route_operation(env, caller, operation)
    }

    pub fn blacklist(env: Env, caller: Address, account: Address) -> RouteOutcome {
        let operation = operations::blacklist(&env, account);
        Self::route_operation(env, caller, operation)
    }

    pub fn unblacklist(env: Env, caller: Address, account: Address) -> RouteOutcome {
        let operation = operations::unblacklist(&env, account);
        Self::route_operation(env, caller, operation)
    }

    pub fn recover_token(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
        amount: i128,
    ) -> RouteOutcome {
        let operation = operations::recover_token(&env, asset, to, amount);
        Self::route_operation(env, caller, operation)
    }

    pub fn upgrade_token(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> RouteOutcome {
        let operation = operations::upgrade(&env, new_wasm_hash);
        Self::route_operation(env, caller, operation)
    }

    // ---------------------------------------------------------------------
    // Reads. Every read of a transaction refreshes and persists its state.
    // ---------------------------------------------------------------------

    pub fn get_transaction(env: Env, id: BytesN<32>) -> Transaction {
        ok_or_panic(&env, storage::require_initialized(&env));
        let mut transaction = ok_or_panic(&env, store::load(&env, &id));
        ok_or_panic(&env, state::refresh(&env, &mut transaction));
        transaction
    }

    pub fn refresh_state(env: Env, id: BytesN<32>) -> TransactionState {
        ok_or_panic(&env, storage::require_initialized(&env));
        let mut transaction = ok_or_panic(&env, store::load(&env, &id));
        ok_or_panic(&env, state::refresh(&env, &mut transaction))
    }

    pub fn transaction_exists(env: Env, id: BytesN<32>) -> bool {
        store::exists(&env, &id)
    }

    pub fn has_approved(env: Env, id: BytesN<32>, signer: Address) -> bool {
        store::has_approved(&env, &id, &signer)
    }

    pub fn transaction_count(env: Env) -> u64 {
        ok_or_panic(&env, storage::require_initialized(&env));
        storage::transaction_count(&env)
    }

    pub fn config(env: Env) -> WindowConfig {
        ok_or_panic(&env, storage::config(&env))
    }

    pub fn registry(env: Env) -> Address {
        ok_or_panic(&env, storage::registry(&env))
    }

    pub fn token(env: Env) -> Address {
        ok_or_panic(&env, storage::token(&env))
    }
}

impl TokenMultisig {
    fn route(env: &Env, caller: &Address, operation: Operation) -> Result<RouteOutcome, MultisigError> {
        if registry::client(env)?.is_super_admin(caller) {
            executor::invoke(env, &operation)?;

            let now = env.ledger().timestamp();
            log!(env, "super-admin bypass", operation.selector.clone());
            AdminExecuted {
                admin: caller.clone(),
                selector: operation.selector,
                timestamp: now,
            }
            .publish(env);
            return Ok(RouteOutcome::Executed(now));
        }

        Self::propose(env, caller, operation).map(RouteOutcome::Proposed)
    }

    fn propose(env: &Env, caller: &Address, operation: Operation) -> Result<BytesN<32>, MultisigError> {
        let origin = registry::actor_class(env, caller)?;
        if !permissions::is_permitted(env, origin, &operation.selector) {
            return Err(MultisigError::Unauthorized);
        }

        let now = env.ledger().timestamp();
        let id = store::transaction_id(env, now, caller, &operation);

        let transaction = Transaction {
            id: id.clone(),
            proposer: caller.clone(),
            operation,
            proposed_at: now,
            first_approval_at: None,
            approval_count: 0,
            state: TransactionState::Pending,
            origin,
        };
        store::insert(env, &transaction)?;

        Proposed {
            id: id.clone(),
            proposer: caller.clone(),
            origin,
            proposed_at: now,
        }
        .publish(env);
        Ok(id)
    }

    fn do_approve(env: &Env, signer: &Address, id: &BytesN<32>) -> Result<(), MultisigError> {
        registry::require_signer(env, signer)?;
        let mut transaction = store::load(env, id)?;
        if store::has_approved(env, id, signer) {
            return Err(MultisigError::AlreadyApproved);
        }

        if !state::refresh(env, &mut transaction)?.is_open() {
            return Err(MultisigError::InvalidState);
        }

        let now = env.ledger().timestamp();
        if transaction.first_approval_at.is_none() {
            transaction.first_approval_at = Some(now);
        }
        transaction.approval_count += 1;
        store::set_approval(env, id, signer, true);
        store::save(env, &transaction);

        Approved {
            id: id.clone(),
            signer: signer.clone(),
            approval_count: transaction.approval_count,
            timestamp: now,
        }
        .publish(env);

        state::refresh(env, &mut transaction)?;
        Ok(())
    }

    fn do_revoke(env: &Env, signer: &Address, id: &BytesN<32>) -> Result<(), MultisigError> {
        registry::require_signer(env, signer)?;
        let mut transaction = store::load(env, id)?;
        if !store::has_approved(env, id, signer) {
            return Err(MultisigError::NotApproved);
        }

        if state::refresh(env, &mut transaction)? != TransactionState::Active {
            return Err(MultisigError::InvalidState);
        }

        // Revoking never clears first_approval_at.
        transaction.approval_count -= 1;
        store::set_approval(env, id, signer, false);
        store::save(env, &transaction);

        Revoked {
            id: id.clone(),
            signer: signer.clone(),
            approval_count: transaction.approval_count,
            timestamp: env.ledger().timestamp(),
        }
        .publish(env);

        state::refresh(env, &mut transaction)?;
        Ok(())
    }
}
