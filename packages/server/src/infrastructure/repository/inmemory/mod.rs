//! InMemory implementations.

mod user;

pub use user::InMemoryUserRepository;
