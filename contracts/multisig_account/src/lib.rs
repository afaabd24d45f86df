#![no_std]

mod derive;
mod events;
mod gateway;
mod lifecycle;
mod registry;
mod store;

pub mod errors;
pub mod multisig;
pub mod params;
pub mod types;

pub use errors::MultisigError;
pub use gateway::{ActionExecutor, ActionExecutorClient};
pub use multisig::{MultisigAccountContract, MultisigAccountContractClient};
pub use params::Params;
pub use types::{Proposal, SharedAccount};
