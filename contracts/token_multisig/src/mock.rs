//! In-process stand-ins for the two external collaborators: the role
//! registry and the controlled token.

pub mod registry {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

    #[contracttype]
    #[derive(Clone)]
    pub enum RegistryKey {
        Signers,
        SuperAdmin,
        FallbackAdmin,
    }

    #[contract]
    pub struct MockRegistry;

    #[contractimpl]
    impl MockRegistry {
        pub fn set_signers(env: Env, signers: Vec<Address>) {
            env.storage().instance().set(&RegistryKey::Signers, &signers);
        }

        pub fn set_super_admin(env: Env, admin: Address) {
            env.storage().instance().set(&RegistryKey::SuperAdmin, &admin);
        }

        pub fn set_fallback_admin(env: Env, admin: Address) {
            env.storage().instance().set(&RegistryKey::FallbackAdmin, &admin);
        }

        pub fn is_signer(env: Env, account: Address) -> bool {
            Self::signers(&env).contains(&account)
        }

        pub fn is_super_admin(env: Env, account: Address) -> bool {
            env.storage()
                .instance()
                .get::<_, Address>(&RegistryKey::SuperAdmin)
                .map_or(false, |admin| admin == account)
        }

        pub fn is_fallback_admin(env: Env, account: Address) -> bool {
            env.storage()
                .instance()
                .get::<_, Address>(&RegistryKey::FallbackAdmin)
                .map_or(false, |admin| admin == account)
        }

        pub fn total_signers(env: Env) -> u32 {
            Self::signers(&env).len()
        }
    }

    impl MockRegistry {
        fn signers(env: &Env) -> Vec<Address> {
            env.storage()
                .instance()
                .get(&RegistryKey::Signers)
                .unwrap_or(Vec::new(env))
        }
    }
}

pub mod token {
    use soroban_sdk::{
        contract, contracterror, contractimpl, contracttype, panic_with_error, Address, BytesN,
        Env,
    };

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum MockTokenError {
        Rejected = 1,
    }

    #[contracttype]
    #[derive(Clone)]
    pub enum TokenKey {
        Failing,
        Calls,
        Paused,
        Balance(Address),
        Blacklisted(Address),
        Recovered(Address, Address),
        WasmHash,
    }

    #[contract]
    pub struct MockToken;

    #[contractimpl]
    impl MockToken {
        /// When set, every state-changing call records itself and then fails.
        pub fn set_failing(env: Env, failing: bool) {
            env.storage().instance().set(&TokenKey::Failing, &failing);
        }

        pub fn mint(env: Env, to: Address, amount: i128) {
            Self::record_call(&env);
            let balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .instance()
                .set(&TokenKey::Balance(to), &(balance + amount));
        }

        pub fn burn(env: Env, from: Address, amount: i128) {
            Self::record_call(&env);
            let balance = Self::balance(env.clone(), from.clone());
            env.storage()
                .instance()
                .set(&TokenKey::Balance(from), &(balance - amount));
        }

        pub fn pause(env: Env) {
            Self::record_call(&env);
            env.storage().instance().set(&TokenKey::Paused, &true);
        }

        pub fn unpause(env: Env) {
            Self::record_call(&env);
            env.storage().instance().set(&TokenKey::Paused, &false);
        }

        pub fn blacklist(env: Env, account: Address) {
            Self::record_call(&env);
            env.storage()
                .instance()
                .set(&TokenKey::Blacklisted(account), &true);
        }

        pub fn unblacklist(env: Env, account: Address) {
            Self::record_call(&env);
            env.storage()
                .instance()
                .remove(&TokenKey::Blacklisted(account));
        }

        pub fn recover_token(env: Env, asset: Address, to: Address, amount: i128) {
            Self::record_call(&env);
            env.storage()
                .instance()
                .set(&TokenKey::Recovered(asset, to), &amount);
        }

        pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
            Self::record_call(&env);
            env.storage().instance().set(&TokenKey::WasmHash, &new_wasm_hash);
        }

        /// Completes without trapping but reports failure.
        pub fn refuse(env: Env) -> bool {
            Self::record_call(&env);
            false
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            env.storage()
                .instance()
                .get(&TokenKey::Balance(id))
                .unwrap_or(0)
        }

        pub fn paused(env: Env) -> bool {
            env.storage()
                .instance()
                .get(&TokenKey::Paused)
                .unwrap_or(false)
        }

        pub fn is_blacklisted(env: Env, account: Address) -> bool {
            env.storage()
                .instance()
                .get(&TokenKey::Blacklisted(account))
                .unwrap_or(false)
        }

        pub fn recovered(env: Env, asset: Address, to: Address) -> i128 {
            env.storage()
                .instance()
                .get(&TokenKey::Recovered(asset, to))
                .unwrap_or(0)
        }

        pub fn wasm_hash(env: Env) -> Option<BytesN<32>> {
            env.storage().instance().get(&TokenKey::WasmHash)
        }

        pub fn calls(env: Env) -> u32 {
            env.storage().instance().get(&TokenKey::Calls).unwrap_or(0)
        }
    }

    impl MockToken {
        fn record_call(env: &Env) {
            let calls = Self::calls(env.clone());
            env.storage().instance().set(&TokenKey::Calls, &(calls + 1));

            let failing: bool = env
                .storage()
                .instance()
                .get(&TokenKey::Failing)
                .unwrap_or(false);
            if failing {
                panic_with_error!(env, MockTokenError::Rejected);
            }
        }
    }
}
