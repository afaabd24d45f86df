//! Shared-account records: signer set, threshold and permission tag.
//!
//! Signer sets are append-only. Nothing in this module removes a signer or
//! deletes an account.

use soroban_sdk::{log, Address, BytesN, Env, Vec};

use crate::derive;
use crate::errors::MultisigError;
use crate::events::{AccountCreated, SignerAdded};
use crate::params::{Params, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::types::{DataKey, SharedAccount};

pub fn load(env: &Env, account_id: &BytesN<20>) -> Result<SharedAccount, MultisigError> {
    env.storage()
        .persistent()
        .get(&DataKey::Account(account_id.clone()))
        .ok_or(MultisigError::AccountNotFound)
}

fn save(env: &Env, account: &SharedAccount) {
    let key = DataKey::Account(account.id.clone());
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Loads the account and checks that `principal` is one of its signers.
pub fn load_for_signer(
    env: &Env,
    account_id: &BytesN<20>,
    principal: &Address,
) -> Result<SharedAccount, MultisigError> {
    let account = load(env, account_id)?;
    if !account.is_signer(principal) {
        log!(env, "rejected non-signer", principal.clone());
        return Err(MultisigError::PermissionDenied);
    }
    Ok(account)
}

pub fn create(
    env: &Env,
    params: &Params,
    seed: u32,
    threshold: u32,
    signers: Vec<Address>,
    creator: Address,
    permission: u32,
) -> Result<BytesN<20>, MultisigError> {
    if threshold < 1 {
        return Err(MultisigError::InvalidThreshold);
    }

    let escrow = env.current_contract_address();
    let mut members: Vec<Address> = Vec::new(env);
    for signer in signers.iter() {
        if signer == escrow {
            return Err(MultisigError::AddressInvalid);
        }
        if members.contains(&signer) {
            return Err(MultisigError::DuplicateSigner);
        }
        members.push_back(signer);
    }
    if creator == escrow {
        return Err(MultisigError::AddressInvalid);
    }
    if !members.contains(&creator) {
        members.push_back(creator.clone());
    }

    if !params.signer_count_allowed(members.len()) {
        return Err(MultisigError::InvalidSignerCount);
    }
    if threshold > members.len() {
        return Err(MultisigError::InvalidThreshold);
    }

    let id = derive::account_id(env, seed);
    if env.storage().persistent().has(&DataKey::Account(id.clone())) {
        log!(env, "account already exists for seed", seed);
        return Err(MultisigError::DuplicateAccount);
    }

    let account = SharedAccount {
        id: id.clone(),
        creator: creator.clone(),
        threshold,
        signers: members,
        permission,
    };
    save(env, &account);

    AccountCreated {
        account_id: id.clone(),
        creator,
        threshold,
        signer_count: account.signers.len(),
    }
    .publish(env);

    Ok(id)
}

/// Appends `new_signer` and optionally replaces the threshold.
///
/// `authority` must already be a signer of the account.
pub fn add_signer(
    env: &Env,
    params: &Params,
    account_id: &BytesN<20>,
    authority: &Address,
    new_signer: Address,
    new_threshold: Option<u32>,
) -> Result<(), MultisigError> {
    let mut account = load_for_signer(env, account_id, authority)?;

    if new_signer == env.current_contract_address() {
        return Err(MultisigError::AddressInvalid);
    }
    if account.is_signer(&new_signer) {
        return Err(MultisigError::DuplicateSigner);
    }

    let count = account.signers.len() + 1;
    if count > params.max_signers {
        return Err(MultisigError::InvalidSignerCount);
    }

    if let Some(threshold) = new_threshold {
        if threshold < 1 || threshold > count {
            return Err(MultisigError::InvalidThreshold);
        }
        account.threshold = threshold;
    }

    account.signers.push_back(new_signer.clone());
    save(env, &account);

    SignerAdded {
        account_id: account_id.clone(),
        signer: new_signer,
        threshold: account.threshold,
    }
    .publish(env);

    Ok(())
}
