use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 0,
    InvalidParams = 2,
    Unauthorized = 3,
    AddressInvalid = 4,
    AccountNotFound = 5,
    DuplicateAccount = 6,
    InvalidThreshold = 7,
    InvalidSignerCount = 8,
    DuplicateSigner = 9,
    PermissionDenied = 10,
    ProposalNotFound = 11,
    ProposalMismatch = 12,
    ThresholdNotMet = 13,
    DispatchFailed = 14,
    EscrowTransferFailed = 15,
    NotImplemented = 16,
}
