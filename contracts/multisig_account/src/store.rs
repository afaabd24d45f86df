//! Proposal records keyed by id, with a unique secondary index on
//! `(account_id, fingerprint)`.

use soroban_sdk::{BytesN, Env};

use crate::errors::MultisigError;
use crate::params::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::types::{DataKey, Proposal};

fn next_id(env: &Env) -> u64 {
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextProposalId)
        .unwrap_or(0u64);
    let id = current + 1;
    env.storage().instance().set(&DataKey::NextProposalId, &id);
    id
}

fn write(env: &Env, key: &DataKey, proposal: &Proposal) {
    env.storage().persistent().set(key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Assigns the next id to `proposal` and persists it with its index entry.
pub fn insert(env: &Env, mut proposal: Proposal) -> Proposal {
    proposal.id = next_id(env);

    write(env, &DataKey::Proposal(proposal.id), &proposal);

    let index = DataKey::ProposalIndex(proposal.account_id.clone(), proposal.fingerprint.clone());
    env.storage().persistent().set(&index, &proposal.id);
    env.storage()
        .persistent()
        .extend_ttl(&index, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    proposal
}

pub fn get_by_id(env: &Env, id: u64) -> Result<Proposal, MultisigError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(MultisigError::ProposalNotFound)
}

pub fn get_by_fingerprint(
    env: &Env,
    account_id: &BytesN<20>,
    fingerprint: &BytesN<32>,
) -> Result<Proposal, MultisigError> {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::ProposalIndex(account_id.clone(), fingerprint.clone()))
        .ok_or(MultisigError::ProposalNotFound)?;
    get_by_id(env, id)
}

/// Full replace of an existing record. The index is keyed on fields that
/// never change after insert, so only its TTL is extended.
pub fn update(env: &Env, proposal: &Proposal) {
    write(env, &DataKey::Proposal(proposal.id), proposal);
    env.storage().persistent().extend_ttl(
        &DataKey::ProposalIndex(proposal.account_id.clone(), proposal.fingerprint.clone()),
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn delete(env: &Env, proposal: &Proposal) {
    env.storage().persistent().remove(&DataKey::Proposal(proposal.id));
    env.storage().persistent().remove(&DataKey::ProposalIndex(
        proposal.account_id.clone(),
        proposal.fingerprint.clone(),
    ));
}
