use soroban_sdk::{Bytes, BytesN, Env};

/// Derives the shared-account id for `seed`.
///
/// The id is the first 20 bytes of `sha256(network_id || seed_be)`, so the
/// same seed maps to the same account on a given network and to a different
/// one on another network. Seeds are public; the id is not a secret.
pub fn account_id(env: &Env, seed: u32) -> BytesN<20> {
    let mut input = Bytes::from_array(env, &env.ledger().network_id().to_array());
    input.extend_from_array(&seed.to_be_bytes());

    let digest = env.crypto().sha256(&input).to_bytes().to_array();
    let mut id = [0u8; 20];
    id.copy_from_slice(&digest[..20]);
    BytesN::from_array(env, &id)
}

/// Fingerprint used to deduplicate proposals: `sha256(payload)`.
pub fn action_fingerprint(env: &Env, payload: &Bytes) -> BytesN<32> {
    env.crypto().sha256(payload).to_bytes()
}
