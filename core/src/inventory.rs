//! # Inventory Model
//!
//! A [`Network`] owns its [`Computer`]s, each computer owns its [`Address`]es and
//! hardware [`Component`]s, and a [`Disk`] owns its [`Partition`]s. Every parent
//! owns its children by value, so a derived `Clone` is always a deep copy and
//! the copy shares nothing with its source.
//!
//! Containers are append-only: children are added through chained `add_*`
//! methods (or their owned `with_*` twins) and keep their insertion order.
//! Values are stored exactly as given; zero or negative sizes are not rejected.

pub mod address;
pub mod component;
pub mod computer;
pub mod disk;
pub mod network;

pub use address::Address;
pub use component::{Component, Cpu, Memory};
pub use computer::Computer;
pub use disk::{Disk, Partition, StorageKind};
pub use network::Network;
