use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamsUpdated {
    #[topic]
    pub admin: Address,
    pub deposit_amount: i128,
    pub executor: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountCreated {
    #[topic]
    pub account_id: BytesN<20>,
    pub creator: Address,
    pub threshold: u32,
    pub signer_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerAdded {
    #[topic]
    pub account_id: BytesN<20>,
    pub signer: Address,
    pub threshold: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalOpened {
    #[topic]
    pub account_id: BytesN<20>,
    #[topic]
    pub proposal_id: u64,
    pub fingerprint: BytesN<32>,
    pub depositor: Address,
    pub deposit: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalApproved {
    #[topic]
    pub account_id: BytesN<20>,
    #[topic]
    pub proposal_id: u64,
    pub approver: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalDispatched {
    #[topic]
    pub account_id: BytesN<20>,
    #[topic]
    pub proposal_id: u64,
    pub dispatcher: Address,
    pub receipt: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCancelled {
    #[topic]
    pub account_id: BytesN<20>,
    #[topic]
    pub proposal_id: u64,
    pub refunded: i128,
}
