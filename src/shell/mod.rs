// Composition root: configuration, shared request state, authentication,
// response shapes, middleware and the router.

pub mod auth;
pub mod config;
pub mod http;
pub mod middleware;
pub mod responses;
pub mod state;
