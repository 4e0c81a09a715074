//! Short identifier generation.
//!
//! Ids are drawn uniformly from `[a-z0-9]`, giving 36^8 (about 2.8e12)
//! possible values. Collisions are rare but still checked against the store.

use std::future::Future;

use rand::Rng;

use crate::error::AppError;

/// Length of every generated id.
pub const ID_LENGTH: usize = 8;

/// Candidates tried before giving up.
pub const MAX_ATTEMPTS: usize = 5;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random id of [`ID_LENGTH`] lowercase alphanumeric characters.
pub fn generate_id() -> String {
    let mut rng = rand::rng();

    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `id` has the shape of a generated id.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Generates an id that the `exists` predicate reports as free.
///
/// The predicate is called once per candidate, at most [`MAX_ATTEMPTS`] times.
/// Errors from the predicate are returned unchanged.
///
/// # Errors
///
/// Returns [`AppError::IdGenerationExhausted`] if every candidate collided.
///
/// # Examples
///
/// ```
/// use link_cloner::utils::id_generator::{ID_LENGTH, generate_unique_id};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), link_cloner::AppError> {
/// let taken = vec!["aaaaaaaa".to_string()];
///
/// let id = generate_unique_id(|candidate| {
///     let collides = taken.contains(&candidate);
///     async move { Ok(collides) }
/// })
/// .await?;
///
/// assert_eq!(id.len(), ID_LENGTH);
/// assert!(!taken.contains(&id));
/// # Ok(())
/// # }
/// ```
pub async fn generate_unique_id<F, Fut>(mut exists: F) -> Result<String, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let candidate = generate_id();

        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }

        tracing::debug!("Id collision on attempt {}: {}", attempt, candidate);
    }

    Err(AppError::IdGenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_has_correct_length() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
    }

    #[test]
    fn test_generate_id_lowercase_alphanumeric() {
        for _ in 0..200 {
            let id = generate_id();
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in {id}"
            );
        }
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("abcd1234"));
        assert!(is_valid_id("00000000"));
        assert!(!is_valid_id("abc123"));
        assert!(!is_valid_id("ABCD1234"));
        assert!(!is_valid_id("abcd-234"));
        assert!(!is_valid_id("abcd12345"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("favicon.ico"));
    }

    #[tokio::test]
    async fn test_unique_id_first_candidate_free() {
        let mut calls = 0;

        let id = generate_unique_id(|_| {
            calls += 1;
            async { Ok(false) }
        })
        .await
        .unwrap();

        assert!(is_valid_id(&id));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_unique_id_retries_after_collision() {
        let mut calls = 0;

        let result = generate_unique_id(|_| {
            calls += 1;
            let taken = calls < 3;
            async move { Ok(taken) }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_unique_id_exhausted_after_max_attempts() {
        let mut calls = 0;

        let result = generate_unique_id(|_| {
            calls += 1;
            async { Ok(true) }
        })
        .await;

        assert!(matches!(
            result,
            Err(AppError::IdGenerationExhausted { attempts: 5 })
        ));
        assert_eq!(calls, MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_unique_id_propagates_store_error() {
        let result =
            generate_unique_id(|_| async { Err(AppError::internal("store unavailable")) }).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_unique_id_passes_candidate_to_predicate() {
        let mut seen = Vec::new();

        let id = generate_unique_id(|candidate| {
            seen.push(candidate);
            async { Ok(false) }
        })
        .await
        .unwrap();

        assert_eq!(seen, vec![id]);
    }
}
