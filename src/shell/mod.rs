// Composition root.
//
// - Read config from the environment.
// - Pick in-memory or postgres event stores and rebuild the read models.
// - Wire stores and read models into the use case handlers.
// - Spawn background workers (reset token purge).

pub mod bootstrap;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
