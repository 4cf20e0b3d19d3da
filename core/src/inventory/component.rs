//! Hardware units attached to a [`Computer`](super::Computer).

use std::fmt;

use crate::inventory::disk::Disk;
use crate::render::{self, Render};

/// A processor: core count and clock speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpu {
    cores: i64,
    mhz: i64,
}

impl Cpu {
    pub const fn new(cores: i64, mhz: i64) -> Self {
        Self { cores, mhz }
    }

    pub fn cores(&self) -> i64 {
        self.cores
    }

    pub fn mhz(&self) -> i64 {
        self.mhz
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU, {} cores @ {}MHz", self.cores, self.mhz)
    }
}

/// A memory module, sized in MiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Memory {
    size_mib: i64,
}

impl Memory {
    pub const fn new(size_mib: i64) -> Self {
        Self { size_mib }
    }

    pub fn size_mib(&self) -> i64 {
        self.size_mib
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory, {} MiB", self.size_mib)
    }
}

/// Any hardware unit a computer can hold.
///
/// The set is closed; cloning a `Component` always yields the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    pub fn as_disk(&self) -> Option<&Disk> {
        match self {
            Component::Disk(disk) => Some(disk),
            _ => None,
        }
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Component::Disk(disk)
    }
}

impl Render for Component {
    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        match self {
            Component::Cpu(cpu) => render::push_line(out, prefix, is_last, cpu),
            Component::Memory(memory) => render::push_line(out, prefix, is_last, memory),
            Component::Disk(disk) => disk.render_into(out, prefix, is_last),
        }
    }
}
