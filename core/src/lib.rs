//! # Rackmap Core
//!
//! The inventory model and its tree renderer.
//!
//! * **[`inventory`]**: `Network -> Computer -> {Address, Component}` with
//!   `Component` being one of CPU, memory or disk (with partitions).
//! * **[`render`]**: the [`render::Render`] trait every entity implements to draw
//!   itself and its descendants as indented text.
//! * **[`sample`]**: a ready-made inventory used by the CLI.

pub mod inventory;
pub mod render;
pub mod sample;

pub use inventory::{Address, Component, Computer, Cpu, Disk, Memory, Network, Partition, StorageKind};
pub use render::Render;
