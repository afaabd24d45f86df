use soroban_sdk::{contracttype, Address, BytesN, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Params,
    NextProposalId,
    Account(BytesN<20>),
    Proposal(u64),
    ProposalIndex(BytesN<20>, BytesN<32>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharedAccount {
    /// Derived from the creation seed, see `derive::account_id`.
    pub id: BytesN<20>,
    pub creator: Address,
    pub threshold: u32,
    pub signers: Vec<Address>,
    /// Opaque policy tag, forwarded to the executor on dispatch.
    pub permission: u32,
}

impl SharedAccount {
    pub fn is_signer(&self, principal: &Address) -> bool {
        self.signers.contains(principal)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub account_id: BytesN<20>,
    /// sha256 of the action payload.
    pub fingerprint: BytesN<32>,
    pub depositor: Address,
    /// Token the deposit was paid in; refunds use this, not current params.
    pub deposit_token: Address,
    pub deposit: i128,
    pub approvals: Vec<Address>,
    pub created_at: u64,
}

impl Proposal {
    pub fn is_approved_by(&self, principal: &Address) -> bool {
        self.approvals.contains(principal)
    }
}
