//! Infrastructure layer implementations.

pub mod client;

pub use client::{ClientHandle, ClientHandleBuilder};
