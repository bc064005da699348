//! Authentication primitives.
//!
//! The only authentication surface in this system is the password check on
//! `POST /login`; no session or token is issued. [`password`] wraps the
//! one-way hash/verify capability (Argon2id).

pub mod password;
