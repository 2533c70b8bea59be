//! HTTP surface of Mockbase.
//!
//! Exposes the record operations of [`mockbase::Records`] as a REST API:
//! one route per operation, JSON bodies in and out, and permissive CORS so the
//! server can stand in for a real backend during front-end development.
//!
//! ```no_run
//! use std::{net::SocketAddr, sync::Arc};
//!
//! use mockbase::{FileStore, Records};
//!
//! # async fn example() -> mockbase::Result<()> {
//! let records = Arc::new(Records::new(FileStore::new("./data.json")));
//! let addr: SocketAddr = ([0, 0, 0, 0], 8000).into();
//! mockbase_server::start_server(addr, records).await?;
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod response;
pub mod router;
pub mod server;


pub use router::create_router;
pub use server::{serve, start_server};
