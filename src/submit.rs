//! Form submission orchestration
//!
//! Submission is fire and forget: the mint call either settles cleanly or its
//! failure goes to the console log. The form never learns the outcome.

use std::future::Future;

use crate::types::Pet;

/// Drive one mint attempt to completion.
///
/// The mint operation is handed in by the caller so the orchestration stays
/// independent of the wire. A failed mint is logged and swallowed; callers
/// observe the same return either way.
pub async fn submit<F, Fut>(pet: Pet, mint: F)
where
    F: FnOnce(Pet) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    if let Err(err) = mint(pet).await {
        log::error!("minting failed: {}", err);
    }
}
