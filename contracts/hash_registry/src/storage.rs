use soroban_sdk::{contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub owner: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Registration(BytesN<32>),
}

pub fn get_registration(env: &Env, hash: &BytesN<32>) -> Option<Registration> {
    env.storage()
        .persistent()
        .get(&DataKey::Registration(hash.clone()))
}

pub fn set_registration(env: &Env, hash: &BytesN<32>, record: &Registration) {
    env.storage()
        .persistent()
        .set(&DataKey::Registration(hash.clone()), record);
}

pub fn has_registration(env: &Env, hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Registration(hash.clone()))
}
