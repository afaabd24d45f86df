//! Proposal state machine.
//!
//! `NONE -> OPEN -> (APPROVING)* -> DISPATCHED`, or `OPEN -> CANCELLED`.
//! Both terminal states delete the record. Every function reloads the
//! account and proposal from storage before acting on them.
//!
//! An invocation that returns `Err` is rolled back by the host, so a failed
//! deposit transfer never leaves a proposal behind and a failed dispatch
//! never consumes one.

use soroban_sdk::{log, Address, Bytes, BytesN, Env, Vec};

use crate::derive;
use crate::errors::MultisigError;
use crate::events::{ProposalApproved, ProposalCancelled, ProposalDispatched, ProposalOpened};
use crate::gateway;
use crate::params::Params;
use crate::registry;
use crate::store;
use crate::types::{Proposal, SharedAccount};

/// Opens a proposal for `payload`, or returns the id of the live one.
///
/// A repeat call for the same account and payload is a no-op: no record is
/// written and no deposit is charged.
pub fn initialize_proposal(
    env: &Env,
    params: &Params,
    account_id: &BytesN<20>,
    proposer: &Address,
    payload: &Bytes,
    deposit_amount: i128,
) -> Result<u64, MultisigError> {
    registry::load_for_signer(env, account_id, proposer)?;

    let fingerprint = derive::action_fingerprint(env, payload);
    if let Ok(existing) = store::get_by_fingerprint(env, account_id, &fingerprint) {
        return Ok(existing.id);
    }

    let mut approvals = Vec::new(env);
    approvals.push_back(proposer.clone());

    let proposal = store::insert(
        env,
        Proposal {
            id: 0,
            account_id: account_id.clone(),
            fingerprint: fingerprint.clone(),
            depositor: proposer.clone(),
            deposit_token: params.deposit_token.clone(),
            deposit: deposit_amount,
            approvals,
            created_at: env.ledger().timestamp(),
        },
    );

    gateway::collect_deposit(env, params, proposer, deposit_amount)?;

    ProposalOpened {
        account_id: account_id.clone(),
        proposal_id: proposal.id,
        fingerprint,
        depositor: proposer.clone(),
        deposit: deposit_amount,
    }
    .publish(env);

    Ok(proposal.id)
}

/// Records `approver`'s approval on proposal `proposal_id` of `account_id`.
pub fn approve(
    env: &Env,
    account_id: &BytesN<20>,
    proposal_id: u64,
    approver: &Address,
) -> Result<(), MultisigError> {
    let account = registry::load_for_signer(env, account_id, approver)?;
    let proposal = store::get_by_id(env, proposal_id)?;
    if proposal.account_id != *account_id {
        return Err(MultisigError::ProposalMismatch);
    }
    record_approval(env, &account, proposal, approver);
    Ok(())
}

/// Same as [`approve`], locating the proposal by its action payload.
pub fn approve_payload(
    env: &Env,
    account_id: &BytesN<20>,
    approver: &Address,
    payload: &Bytes,
) -> Result<u64, MultisigError> {
    let account = registry::load_for_signer(env, account_id, approver)?;
    let fingerprint = derive::action_fingerprint(env, payload);
    let proposal = store::get_by_fingerprint(env, account_id, &fingerprint)?;
    let id = proposal.id;
    record_approval(env, &account, proposal, approver);
    Ok(id)
}

// Set merge, capped at the threshold. Re-delivered or surplus approvals
// leave the record untouched.
fn record_approval(env: &Env, account: &SharedAccount, mut proposal: Proposal, approver: &Address) {
    if proposal.is_approved_by(approver) {
        return;
    }
    if proposal.approvals.len() >= account.threshold {
        return;
    }

    proposal.approvals.push_back(approver.clone());
    store::update(env, &proposal);

    ProposalApproved {
        account_id: account.id.clone(),
        proposal_id: proposal.id,
        approver: approver.clone(),
        approvals: proposal.approvals.len(),
    }
    .publish(env);
}

/// Counts `approver` towards the threshold and, if met, executes `payload`
/// on behalf of the shared account. The proposal is deleted and its deposit
/// returned only when the executor succeeds.
pub fn approve_and_dispatch(
    env: &Env,
    params: &Params,
    account_id: &BytesN<20>,
    approver: &Address,
    payload: &Bytes,
    expected_proposal_id: u64,
) -> Result<BytesN<32>, MultisigError> {
    let account = registry::load_for_signer(env, account_id, approver)?;

    let fingerprint = derive::action_fingerprint(env, payload);
    let proposal = store::get_by_fingerprint(env, account_id, &fingerprint)?;
    if proposal.id != expected_proposal_id {
        return Err(MultisigError::ProposalMismatch);
    }

    let mut approvals = proposal.approvals.len();
    if !proposal.is_approved_by(approver) {
        approvals += 1;
    }
    if approvals < account.threshold {
        log!(env, "threshold not met", proposal.id, approvals, account.threshold);
        return Err(MultisigError::ThresholdNotMet);
    }

    let receipt = gateway::dispatch(env, params, &account, payload)?;
    store::delete(env, &proposal);
    gateway::refund_deposit(env, &proposal)?;

    ProposalDispatched {
        account_id: account_id.clone(),
        proposal_id: proposal.id,
        dispatcher: approver.clone(),
        receipt: receipt.clone(),
    }
    .publish(env);

    Ok(receipt)
}

/// Withdraws an open proposal and refunds its deposit. Only the depositor
/// may cancel.
pub fn cancel_proposal(
    env: &Env,
    account_id: &BytesN<20>,
    proposal_id: u64,
    caller: &Address,
) -> Result<(), MultisigError> {
    registry::load(env, account_id)?;
    let proposal = store::get_by_id(env, proposal_id)?;
    if proposal.account_id != *account_id {
        return Err(MultisigError::ProposalMismatch);
    }
    if proposal.depositor != *caller {
        return Err(MultisigError::PermissionDenied);
    }

    store::delete(env, &proposal);
    gateway::refund_deposit(env, &proposal)?;

    ProposalCancelled {
        account_id: account_id.clone(),
        proposal_id,
        refunded: proposal.deposit,
    }
    .publish(env);

    Ok(())
}
