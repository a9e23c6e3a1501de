//! In-memory account adapters.

mod account;

pub use account::InMemoryAccountRepository;
