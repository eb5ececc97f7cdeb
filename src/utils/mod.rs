//! Startup and retry helpers shared by the binary and the clients.

pub mod bootstrap;
pub mod retry;
