//! Newsletter signup: validation rules and the interactive flow
//!
//! Nothing is sent anywhere. An accepted signup is logged and acknowledged
//! with a local notice, exactly like the page it mirrors.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use temple_i18n::LanguageContext;
use tracing::info;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Outcome of one signup attempt, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    EmptyEmail,
    InvalidEmail,
    ConsentMissing,
    Accepted,
}

impl SignupOutcome {
    /// Catalog key for the user-facing notice
    pub fn message_key(self) -> &'static str {
        match self {
            Self::EmptyEmail => "form.error.empty",
            Self::InvalidEmail => "form.error.invalid",
            Self::ConsentMissing => "form.error.consent",
            Self::Accepted => "form.success",
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate one submission. The checks run in page order: missing address,
/// malformed address, missing consent, then success.
pub fn evaluate(email: &str, consent: bool) -> SignupOutcome {
    if email.is_empty() {
        return SignupOutcome::EmptyEmail;
    }
    if !is_valid_email(email) {
        return SignupOutcome::InvalidEmail;
    }
    if !consent {
        return SignupOutcome::ConsentMissing;
    }
    SignupOutcome::Accepted
}

/// Prompt for an address and consent, then report the localized outcome.
pub fn run(ctx: &LanguageContext) -> Result<()> {
    cliclack::note(ctx.text("newsletter.title"), ctx.text("newsletter.desc"))?;

    let email: String = cliclack::input(ctx.text("hero.email.placeholder"))
        .placeholder("you@example.org")
        .required(false)
        .default_input("")
        .interact()?;

    let consent: bool = cliclack::confirm(ctx.text("hero.gdpr"))
        .initial_value(false)
        .interact()?;

    let outcome = evaluate(&email, consent);
    let notice = ctx.text(outcome.message_key());
    if outcome.is_accepted() {
        info!("newsletter signup: {}", email);
        cliclack::log::success(notice)?;
    } else {
        cliclack::log::warning(notice)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("hello@dalinsi.org"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("hello@"));
        assert!(!is_valid_email("hello@@example.org"));
        assert!(!is_valid_email("hello@example."));
    }

    #[test]
    fn validation_runs_in_page_order() {
        // An empty address wins over the consent check.
        assert_eq!(evaluate("", false), SignupOutcome::EmptyEmail);
        assert_eq!(evaluate("", true), SignupOutcome::EmptyEmail);
        assert_eq!(evaluate("not-an-email", false), SignupOutcome::InvalidEmail);
        assert_eq!(evaluate("hello@dalinsi.org", false), SignupOutcome::ConsentMissing);
        assert_eq!(evaluate("hello@dalinsi.org", true), SignupOutcome::Accepted);
    }

    #[test]
    fn outcomes_map_to_distinct_notices() {
        let keys = [
            SignupOutcome::EmptyEmail.message_key(),
            SignupOutcome::InvalidEmail.message_key(),
            SignupOutcome::ConsentMissing.message_key(),
            SignupOutcome::Accepted.message_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(SignupOutcome::Accepted.is_accepted());
        assert!(!SignupOutcome::ConsentMissing.is_accepted());
    }
}
