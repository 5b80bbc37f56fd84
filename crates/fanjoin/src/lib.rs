//! Order-preserving concurrent batch enrichment.
//!
//! `fanjoin` turns an ordered list of raw records into an ordered list of
//! enriched records. It fans out one asynchronous computation per record
//! across a bounded pool of worker tasks, fans the results back in, and
//! returns them in the caller's original order regardless of completion
//! order. The call is all-or-nothing: the first failing computation
//! cancels the batch and becomes its single error.
//!
//! Two seams connect a batch to the outside world:
//!
//! - [`Record`]: the raw input row, identified by a batch-unique id.
//! - [`Enrich`]: the opaque, possibly-failing per-record computation.
//!
//! A ready-made computation payload ships with the crate:
//! [`ShortTokenGenerator`], which produces short Crockford-base32
//! identifier tokens.
//!
//! # Example
//!
//! ```
//! use fanjoin::{BatchEnricher, Enrich, Record, ShortTokenGenerator};
//! use std::convert::Infallible;
//!
//! struct User {
//!     id: u64,
//!     username: String,
//! }
//!
//! impl Record for User {
//!     type Id = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct GreetedUser {
//!     id: u64,
//!     username: String,
//!     say_hello: String,
//! }
//!
//! struct Greeter {
//!     tokens: ShortTokenGenerator,
//! }
//!
//! impl Enrich<User> for Greeter {
//!     type Output = GreetedUser;
//!     type Error = Infallible;
//!
//!     async fn enrich(&self, user: &User) -> Result<GreetedUser, Infallible> {
//!         Ok(GreetedUser {
//!             id: user.id,
//!             username: user.username.clone(),
//!             say_hello: format!("Hello {}", self.tokens.generate()),
//!         })
//!     }
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let enricher = BatchEnricher::new(Greeter {
//!     tokens: ShortTokenGenerator::new(),
//! });
//!
//! let users = vec![
//!     User { id: 1, username: "a".into() },
//!     User { id: 2, username: "b".into() },
//! ];
//!
//! let greeted = enricher.enrich_all(users).await.unwrap();
//! assert_eq!(greeted.len(), 2);
//! assert_eq!(greeted[0].id, 1); // input order, always
//! assert_eq!(greeted[1].id, 2);
//! # });
//! ```
//!
//! # Features
//!
//! - `parking-lot`: back the result table with `parking_lot::Mutex`
//!   instead of the std mutex.
//! - `tracing`: emit `tracing` events from the worker pool.

mod enrich;
mod error;
mod mutex;
mod record;
mod token;

pub use crate::enrich::*;
pub use crate::error::*;
pub use crate::mutex::*;
pub use crate::record::*;
pub use crate::token::*;
