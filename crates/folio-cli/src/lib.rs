//! Terminal client for the portfolio API: fetches the snapshot over HTTP and
//! renders it through the project view engine.

pub mod client;
pub mod error;
pub mod render;

pub use client::{load_snapshot, PortfolioClient, Snapshot};
pub use error::ClientError;
