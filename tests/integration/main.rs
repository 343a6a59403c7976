//! HTTP integration tests driving the full router against the in-memory
//! credential store.

mod access_test;
mod helpers;
mod token_test;
mod user_test;
