//! Chat Engine
//!
//! Orchestrates one turn: classify the message, resolve the account,
//! dispatch the matching handler and assemble the outcome. Stateless per
//! turn; identical requests produce identical outcomes.

use std::sync::Arc;

use tracing::debug;

use bank_assistant_accounts::AccountDirectory;
use bank_assistant_config::DomainConfig;
use bank_assistant_core::{BotReply, TurnContext, TurnOutcome};

use crate::context::resolve_account;
use crate::handlers;
use crate::intent::{classify, Intent};

/// Shared, read-only engine; one instance serves all requests.
pub struct ChatEngine {
    directory: Arc<dyn AccountDirectory>,
    domain: Arc<DomainConfig>,
}

impl ChatEngine {
    pub fn new(directory: Arc<dyn AccountDirectory>, domain: Arc<DomainConfig>) -> Self {
        Self { directory, domain }
    }

    /// Run one turn against the message and the client-carried context.
    pub fn handle(&self, message: &str, context: &TurnContext) -> TurnOutcome {
        match classify(message) {
            Intent::Greeting => self.greeting(),
            Intent::Farewell => self.farewell(),
            intent => self.domain_turn(intent, message, context),
        }
    }

    /// Session-opening turn. Carries no context object so the client
    /// keeps whatever account it already had.
    fn greeting(&self) -> TurnOutcome {
        debug!(intent = "greeting", account_resolved = false, "handled chat turn");
        TurnOutcome {
            reply: BotReply::line(format!(
                "Hello! Welcome to {}'s virtual assistant. How can I help you today?",
                self.domain.brand.bank_name
            )),
            quick_replies: vec![
                "Check my balance".to_string(),
                "View transactions".to_string(),
                "Card information".to_string(),
                "Loan details".to_string(),
            ],
            context: None,
            end_of_session: false,
        }
    }

    /// Session-closing turn; sets the end flag and drops suggestions
    /// and context.
    fn farewell(&self) -> TurnOutcome {
        debug!(intent = "farewell", account_resolved = false, "handled chat turn");
        TurnOutcome {
            reply: BotReply::line(format!(
                "Thank you for banking with {}. Have a great day!",
                self.domain.brand.bank_name
            )),
            quick_replies: Vec::new(),
            context: None,
            end_of_session: true,
        }
    }

    fn domain_turn(&self, intent: Intent, message: &str, context: &TurnContext) -> TurnOutcome {
        let account = resolve_account(message, context);
        let account_ref = account.as_deref();
        let directory = self.directory.as_ref();

        let (reply, quick_replies) = match intent {
            Intent::Balance => (
                handlers::balance::respond(account_ref, directory),
                handlers::balance::quick_replies(account_ref),
            ),
            Intent::Transactions => (
                handlers::transactions::respond(account_ref, directory),
                handlers::transactions::quick_replies(account_ref),
            ),
            Intent::Card => (
                handlers::card::respond(account_ref, directory),
                handlers::card::quick_replies(),
            ),
            Intent::Loans => (
                handlers::loans::respond(account_ref, directory),
                handlers::loans::quick_replies(),
            ),
            Intent::Transfer => (
                handlers::transfer::respond(),
                handlers::transfer::quick_replies(),
            ),
            Intent::ExchangeRates => (
                handlers::exchange::respond(&self.domain),
                handlers::exchange::quick_replies(),
            ),
            Intent::Branches => (
                handlers::branches::respond(&self.domain),
                handlers::branches::quick_replies(),
            ),
            Intent::Support => (
                handlers::support::respond(&self.domain),
                handlers::support::quick_replies(),
            ),
            // Greeting and farewell short-circuit in handle(); everything
            // unmatched lands in fallback.
            Intent::Greeting | Intent::Farewell | Intent::Fallback => (
                handlers::fallback::respond(),
                handlers::fallback::quick_replies(),
            ),
        };

        debug!(
            intent = intent.as_str(),
            account_resolved = account.is_some(),
            "handled chat turn"
        );

        TurnOutcome {
            reply,
            quick_replies,
            context: Some(TurnContext { account }),
            end_of_session: false,
        }
    }
}
