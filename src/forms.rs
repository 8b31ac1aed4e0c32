//! Pure pieces of the page's form handling, plus the timer lengths the
//! micro-interactions share.

/// Newsletter address check: whatever remains after trimming must be
/// non-empty and carry an `@`. Deliberately as permissive as the page it
/// came from; the (simulated) backend is the real gatekeeper.
pub fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.contains('@')
}

/// How long the signed-up label stays on the submit button.
pub const SUCCESS_REVERT_MS: i32 = 3_000;
/// How long the error border stays on the email input.
pub const ERROR_REVERT_MS: i32 = 2_000;
/// Simulated fetch delay for the load-more button.
pub const LOAD_MORE_MS: i32 = 1_500;
/// Subscribe button press animation length.
pub const PRESS_MS: i32 = 200;
