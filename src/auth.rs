//! Credential hashing. bcrypt only; the stored string embeds the salt and
//! cost, so verification needs no extra state.

use crate::error::StoreError;

/// Hash a plaintext credential with bcrypt at the given cost.
///
/// bcrypt is CPU-bound by design, so the work runs on the blocking pool
/// rather than stalling the async runtime.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, StoreError> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Verify a plaintext credential against a stored bcrypt hash.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, StoreError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt minimum cost; keeps the tests fast.
    const COST: u32 = 4;

    #[tokio::test]
    async fn hash_then_verify_roundtrip() {
        let hash = hash_password("hunter2", COST).await.unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash).await.unwrap());
        assert!(!verify_password("hunter3", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let a = hash_password("same-password", COST).await.unwrap();
        let b = hash_password("same-password", COST).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").await.is_err());
    }
}
