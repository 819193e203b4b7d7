//! Account directory for the bank assistant
//!
//! Read-only account lookup behind a trait so the in-memory demo store
//! can be swapped for a real ledger client without touching the agent.

pub mod directory;
pub mod memory;

pub use directory::AccountDirectory;
pub use memory::InMemoryAccountDirectory;
