// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! dnsinfo looks up a list of DNS record types for one domain -- one record type after another -- and collects the
//! answers in an ordered result set that can be printed or saved as JSON.
//!
//! # Example
//! ```no_run
//! # use dnsinfo::lookup::{self, LookupOpts};
//! # use dnsinfo::record_types::DEFAULT_RECORD_TYPES;
//! # use dnsinfo::resolver::{Resolver, ResolverConfig, ResolverOpts};
//! # async fn example() -> dnsinfo::Result<()> {
//! let resolver = Resolver::new(ResolverConfig::system(), ResolverOpts::default())?;
//! let results = lookup::lookup(&resolver, "example.com", DEFAULT_RECORD_TYPES, &LookupOpts::default()).await?;
//! for (record_type, values) in &results {
//!     println!("{}: {}", record_type, values.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod lookup;
pub mod output;
pub mod record_types;
pub mod resolver;
#[doc(hidden)]
pub mod utils;

#[cfg(feature = "app-cli")]
pub mod app;

pub use error::Error;
pub use lookup::{LookupOpts, LookupResults};

pub type Result<T> = std::result::Result<T, Error>;
