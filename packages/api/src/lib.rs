//! # API crate — HTTP access to the registration backend
//!
//! The backend itself lives outside this workspace. This crate only knows its
//! contract and implements [`registration::UserDirectory`] on top of it so the
//! UI can check email uniqueness and submit new users.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ApiConfig`]: backend base URL from `REGISTRY_API_URL` (runtime env on native, compile time on WASM) |
//! | [`client`] | [`HttpDirectory`]: `reqwest` client for `GET /users` and `POST /register` |
//!
//! ## Endpoints
//!
//! - `GET {base}/users` → JSON array of users, each with at least an `email`.
//! - `POST {base}/register` with a camelCase [`registration::NewUser`] body →
//!   `{ "message": "..." }`.

pub mod client;
pub mod config;

pub use client::HttpDirectory;
pub use config::ApiConfig;
