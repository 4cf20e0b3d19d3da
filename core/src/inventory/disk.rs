use std::fmt;

use crate::render::{self, Render};

/// Storage technology of a [`Disk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    SolidState,
    Magnetic,
}

impl StorageKind {
    /// Short label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            StorageKind::SolidState => "SSD",
            StorageKind::Magnetic => "HDD",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named slice of a disk, sized in GiB.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    size_gib: i64,
    name: String,
}

impl Partition {
    pub fn new(size_gib: i64, name: impl Into<String>) -> Self {
        Self {
            size_gib,
            name: name.into(),
        }
    }

    pub fn size_gib(&self) -> i64 {
        self.size_gib
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Partitions are labelled by position, so the index comes from the owning disk.
    pub fn render_into(&self, out: &mut String, index: usize, prefix: &str, is_last: bool) {
        render::push_line(
            out,
            prefix,
            is_last,
            format_args!("[{index}]: {} GiB, {}", self.size_gib, self.name),
        );
    }

    pub fn render(&self, index: usize, prefix: &str, is_last: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, index, prefix, is_last);
        out
    }
}

/// A disk drive and its partitions, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Disk {
    kind: StorageKind,
    size_gib: i64,
    partitions: Vec<Partition>,
}

impl Disk {
    pub fn new(kind: StorageKind, size_gib: i64) -> Self {
        Self {
            kind,
            size_gib,
            partitions: Vec::new(),
        }
    }

    pub fn add_partition(&mut self, size_gib: i64, name: impl Into<String>) -> &mut Self {
        self.partitions.push(Partition::new(size_gib, name));
        self
    }

    pub fn with_partition(mut self, size_gib: i64, name: impl Into<String>) -> Self {
        self.add_partition(size_gib, name);
        self
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn size_gib(&self) -> i64 {
        self.size_gib
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl Render for Disk {
    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        render::push_line(
            out,
            prefix,
            is_last,
            format_args!("{}, {} GiB", self.kind, self.size_gib),
        );

        let prefix = render::child_prefix(prefix, is_last);
        let total = self.partitions.len();
        for (idx, partition) in self.partitions.iter().enumerate() {
            partition.render_into(out, idx, &prefix, idx + 1 == total);
        }
    }
}
