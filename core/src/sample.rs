//! A small ready-made inventory.

use crate::inventory::{Computer, Cpu, Disk, Memory, Network, StorageKind};

pub const MISIS_NETWORK: &str = "MISIS network";

/// Two servers: one with CPU and memory, one with CPU and a partitioned HDD.
pub fn misis_network() -> Network {
    Network::new(MISIS_NETWORK)
        .with_computer(
            Computer::new("server1.misis.ru")
                .with_address("192.168.1.1")
                .with_component(Cpu::new(4, 2500))
                .with_component(Memory::new(16000)),
        )
        .with_computer(
            Computer::new("server2.misis.ru")
                .with_address("10.0.0.1")
                .with_component(Cpu::new(8, 3200))
                .with_component(
                    Disk::new(StorageKind::Magnetic, 2000)
                        .with_partition(500, "system")
                        .with_partition(1500, "data"),
                ),
        )
}
