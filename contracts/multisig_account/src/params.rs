//! Module parameters and the admin that may change them.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::MultisigError;
use crate::types::DataKey;

pub const DEFAULT_MIN_SIGNERS: u32 = 2;
pub const DEFAULT_MAX_SIGNERS: u32 = 10;

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    /// Token the proposal deposit is paid in.
    pub deposit_token: Address,
    /// Fixed deposit charged when a proposal is opened.
    pub deposit_amount: i128,
    /// Contract implementing `ActionExecutor`.
    pub executor: Address,
    pub min_signers: u32,
    pub max_signers: u32,
}

impl Params {
    /// Params with the default signer bounds (2..=10).
    pub fn new(deposit_token: Address, deposit_amount: i128, executor: Address) -> Self {
        Self {
            deposit_token,
            deposit_amount,
            executor,
            min_signers: DEFAULT_MIN_SIGNERS,
            max_signers: DEFAULT_MAX_SIGNERS,
        }
    }

    pub fn validate(&self) -> Result<(), MultisigError> {
        if self.deposit_amount < 0 {
            return Err(MultisigError::InvalidParams);
        }
        if self.min_signers == 0 || self.max_signers < self.min_signers {
            return Err(MultisigError::InvalidParams);
        }
        Ok(())
    }

    pub fn signer_count_allowed(&self, count: u32) -> bool {
        count >= self.min_signers && count <= self.max_signers
    }
}

pub fn load(env: &Env) -> Result<Params, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Params)
        .ok_or(MultisigError::NotInitialized)
}

pub fn admin(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(MultisigError::NotInitialized)
}

pub fn save(env: &Env, params: &Params) {
    env.storage().instance().set(&DataKey::Params, params);
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
