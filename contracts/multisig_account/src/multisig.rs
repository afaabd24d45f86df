use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Bytes, BytesN, Env, Vec};

use crate::derive;
use crate::errors::MultisigError;
use crate::events::ParamsUpdated;
use crate::lifecycle;
use crate::params::{self, Params};
use crate::registry;
use crate::store;
use crate::types::{Proposal, SharedAccount};

#[contract]
pub struct MultisigAccountContract;

#[contractimpl]
impl MultisigAccountContract {
    /// Sets the admin and parameters at deployment, so there is no window
    /// in which another caller could claim the contract.
    pub fn __constructor(env: Env, admin: Address, params: Params) {
        if let Err(err) = params.validate() {
            panic_with_error!(&env, err);
        }
        params::set_admin(&env, &admin);
        params::save(&env, &params);
        params::bump_instance(&env);
    }

    pub fn update_params(env: Env, authority: Address, params: Params) -> Result<(), MultisigError> {
        let admin = params::admin(&env)?;
        if authority != admin {
            return Err(MultisigError::Unauthorized);
        }
        authority.require_auth();
        params.validate()?;

        params::save(&env, &params);
        params::bump_instance(&env);

        ParamsUpdated {
            admin,
            deposit_amount: params.deposit_amount,
            executor: params.executor,
        }
        .publish(&env);
        Ok(())
    }

    pub fn params(env: Env) -> Result<Params, MultisigError> {
        params::load(&env)
    }

    pub fn create_account(
        env: Env,
        creator: Address,
        seed: u32,
        threshold: u32,
        signers: Vec<Address>,
        permission: u32,
    ) -> Result<BytesN<20>, MultisigError> {
        let params = Self::require_initialized(&env)?;
        creator.require_auth();
        registry::create(&env, &params, seed, threshold, signers, creator, permission)
    }

    pub fn add_signer(
        env: Env,
        account_id: BytesN<20>,
        authority: Address,
        signer: Address,
        new_threshold: Option<u32>,
    ) -> Result<(), MultisigError> {
        let params = Self::require_initialized(&env)?;
        authority.require_auth();
        registry::add_signer(&env, &params, &account_id, &authority, signer, new_threshold)
    }

    /// Not supported: the threshold can only change together with a signer
    /// addition.
    pub fn set_threshold(
        env: Env,
        _account_id: BytesN<20>,
        _authority: Address,
        _threshold: u32,
    ) -> Result<(), MultisigError> {
        Self::require_initialized(&env)?;
        Err(MultisigError::NotImplemented)
    }

    /// Not supported: signer sets are append-only.
    pub fn cleanup_signer(
        env: Env,
        _account_id: BytesN<20>,
        _authority: Address,
        _signer: Address,
    ) -> Result<(), MultisigError> {
        Self::require_initialized(&env)?;
        Err(MultisigError::NotImplemented)
    }

    pub fn initialize_proposal(
        env: Env,
        account_id: BytesN<20>,
        proposer: Address,
        payload: Bytes,
    ) -> Result<u64, MultisigError> {
        let params = Self::require_initialized(&env)?;
        proposer.require_auth();
        let deposit = params.deposit_amount;
        lifecycle::initialize_proposal(&env, &params, &account_id, &proposer, &payload, deposit)
    }

    pub fn approve(
        env: Env,
        account_id: BytesN<20>,
        proposal_id: u64,
        approver: Address,
    ) -> Result<(), MultisigError> {
        Self::require_initialized(&env)?;
        approver.require_auth();
        lifecycle::approve(&env, &account_id, proposal_id, &approver)
    }

    /// Approves the live proposal for `payload`, returning its id.
    pub fn approve_payload(
        env: Env,
        account_id: BytesN<20>,
        approver: Address,
        payload: Bytes,
    ) -> Result<u64, MultisigError> {
        Self::require_initialized(&env)?;
        approver.require_auth();
        lifecycle::approve_payload(&env, &account_id, &approver, &payload)
    }

    pub fn approve_and_dispatch(
        env: Env,
        account_id: BytesN<20>,
        approver: Address,
        payload: Bytes,
        proposal_id: u64,
    ) -> Result<BytesN<32>, MultisigError> {
        let params = Self::require_initialized(&env)?;
        approver.require_auth();
        lifecycle::approve_and_dispatch(&env, &params, &account_id, &approver, &payload, proposal_id)
    }

    pub fn cancel_proposal(
        env: Env,
        account_id: BytesN<20>,
        proposal_id: u64,
        caller: Address,
    ) -> Result<(), MultisigError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        lifecycle::cancel_proposal(&env, &account_id, proposal_id, &caller)
    }

    /// Not supported: there is no expiry, so there is nothing stale to prune.
    pub fn cleanup_proposal(
        env: Env,
        _account_id: BytesN<20>,
        _proposal_id: u64,
        _caller: Address,
    ) -> Result<(), MultisigError> {
        Self::require_initialized(&env)?;
        Err(MultisigError::NotImplemented)
    }

    pub fn get_account(env: Env, account_id: BytesN<20>) -> Result<SharedAccount, MultisigError> {
        registry::load(&env, &account_id)
    }

    pub fn is_signer(env: Env, account_id: BytesN<20>, principal: Address) -> bool {
        registry::load(&env, &account_id)
            .map(|account| account.is_signer(&principal))
            .unwrap_or(false)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, MultisigError> {
        store::get_by_id(&env, proposal_id)
    }

    pub fn get_proposal_by_payload(
        env: Env,
        account_id: BytesN<20>,
        payload: Bytes,
    ) -> Result<Proposal, MultisigError> {
        let fingerprint = derive::action_fingerprint(&env, &payload);
        store::get_by_fingerprint(&env, &account_id, &fingerprint)
    }

    pub fn derive_account_id(env: Env, seed: u32) -> BytesN<20> {
        derive::account_id(&env, seed)
    }

    pub fn action_fingerprint(env: Env, payload: Bytes) -> BytesN<32> {
        derive::action_fingerprint(&env, &payload)
    }

    fn require_initialized(env: &Env) -> Result<Params, MultisigError> {
        let params = params::load(env)?;
        params::bump_instance(env);
        Ok(params)
    }
}
