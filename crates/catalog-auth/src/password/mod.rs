//! One-way password and client secret hashing.

pub mod hasher;

pub use hasher::PasswordHasher;
