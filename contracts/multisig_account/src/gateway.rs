//! Calls out of the contract: the deposit token (escrow) and the action
//! executor (dispatch). Both go through `try_` clients so a failing callee
//! surfaces as a typed error instead of trapping the whole invocation.

use soroban_sdk::{contractclient, log, token, Address, Bytes, BytesN, Env};

use crate::errors::MultisigError;
use crate::params::Params;
use crate::types::{Proposal, SharedAccount};

/// Interface a downstream action processor exposes to this contract.
///
/// `account_id` names the shared account the action runs on behalf of and
/// `permission` is that account's opaque policy tag. The returned 32 bytes
/// are an execution receipt chosen by the executor.
#[contractclient(name = "ActionExecutorClient")]
pub trait ActionExecutor {
    fn execute(env: Env, account_id: BytesN<20>, permission: u32, payload: Bytes) -> BytesN<32>;
}

/// Moves the proposal deposit from `depositor` into the contract's escrow.
pub fn collect_deposit(
    env: &Env,
    params: &Params,
    depositor: &Address,
    amount: i128,
) -> Result<(), MultisigError> {
    let client = token::TokenClient::new(env, &params.deposit_token);
    match client.try_transfer(depositor, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "deposit transfer failed", depositor.clone(), amount);
            Err(MultisigError::EscrowTransferFailed)
        }
    }
}

/// Returns a proposal's escrowed deposit to its depositor, in the token it
/// was paid in.
pub fn refund_deposit(env: &Env, proposal: &Proposal) -> Result<(), MultisigError> {
    let client = token::TokenClient::new(env, &proposal.deposit_token);
    match client.try_transfer(
        &env.current_contract_address(),
        &proposal.depositor,
        &proposal.deposit,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "deposit refund failed", proposal.id);
            Err(MultisigError::EscrowTransferFailed)
        }
    }
}

pub fn dispatch(
    env: &Env,
    params: &Params,
    account: &SharedAccount,
    payload: &Bytes,
) -> Result<BytesN<32>, MultisigError> {
    let client = ActionExecutorClient::new(env, &params.executor);
    match client.try_execute(&account.id, &account.permission, payload) {
        Ok(Ok(receipt)) => Ok(receipt),
        _ => {
            log!(env, "executor rejected action", account.id.clone());
            Err(MultisigError::DispatchFailed)
        }
    }
}
