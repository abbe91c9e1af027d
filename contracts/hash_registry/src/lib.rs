#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env};

pub use crate::storage::Registration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracterror]
pub enum ContractError {
    InvalidInput = 1,
    AlreadyRegistered = 2,
    NotFound = 3,
}

#[contract]
pub struct HashRegistry;

#[contractimpl]
impl HashRegistry {
    /// Record `hash` as registered by `registrant` at the current ledger
    /// time. A hash can be registered exactly once; there is no update or
    /// removal entrypoint, so the stored record is immutable.
    pub fn register_hash(
        env: Env,
        registrant: Address,
        hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        registrant.require_auth();

        if hash.to_array() == [0u8; 32] {
            return Err(ContractError::InvalidInput);
        }

        if storage::has_registration(&env, &hash) {
            return Err(ContractError::AlreadyRegistered);
        }

        let record = Registration {
            owner: registrant,
            timestamp: env.ledger().timestamp(),
        };
        storage::set_registration(&env, &hash, &record);

        events::hash_registered(&env, &hash, &record.owner, record.timestamp);

        Ok(())
    }

    /// Whether a record exists for `hash`.
    pub fn is_registered(env: Env, hash: BytesN<32>) -> bool {
        storage::has_registration(&env, &hash)
    }

    /// Stored record for `hash`.
    pub fn get_registration(env: Env, hash: BytesN<32>) -> Result<Registration, ContractError> {
        storage::get_registration(&env, &hash).ok_or(ContractError::NotFound)
    }

    /// Contract interface version
    pub fn version(_env: Env) -> u32 {
        1
    }
}
