//! Record layer for toll interoperability between agencies: typed records with
//! validation, status lifecycles, bilateral partition routing, and handlers over
//! a pluggable host store.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod keys;
pub mod lifecycle;
pub mod model;
pub mod partition;
pub mod record;
pub mod scan;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

pub use config::Config;
pub use context::InvocationContext;
pub use dispatch::{Response, invoke, respond};
pub use error::{Error, ErrorKind, Result};
pub use partition::Partition;
pub use scan::FieldFilter;
pub use service::RecordService;
pub use store::{LedgerStore, MemoryStore, SledStore};
