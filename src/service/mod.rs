//! Application logic between the HTTP resources and the storage backend.
//!
//! Services are plain async functions generic over the backend trait so they
//! run unchanged against a real database or a mock.

pub mod customer;
