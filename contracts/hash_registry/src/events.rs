use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub const HASH_REGISTERED: Symbol = symbol_short!("hash_reg");

/// Publish the registration notification, topics `(HASH_REGISTERED, hash)`,
/// data `(owner, timestamp)`.
pub fn hash_registered(env: &Env, hash: &BytesN<32>, owner: &Address, timestamp: u64) {
    env.events()
        .publish((HASH_REGISTERED, hash.clone()), (owner.clone(), timestamp));
}
