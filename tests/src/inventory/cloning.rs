#![cfg(test)]
use rackmap_core::{Component, Computer, Cpu, Disk, Memory, Network, StorageKind, sample};

#[test]
fn clone_renders_identically() {
    let original = sample::misis_network();
    let copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.to_string(), original.to_string());
}

#[test]
fn adding_to_cloned_host_leaves_original_alone() {
    let original = Network::new("OriginalNet")
        .with_computer(Computer::new("server").with_component(Memory::new(4096)));

    let mut copy = original.clone();
    let cloned_server = copy.find_computer_mut("server").expect("server was cloned");
    cloned_server.add_component(Cpu::new(4, 2500));

    assert_eq!(cloned_server.components().len(), 2);
    assert_eq!(original.find_computer("server").map(|s| s.components().len()), Some(1));
}

#[test]
fn mutating_original_after_clone_leaves_copy_alone() {
    let mut original = sample::misis_network();
    let copy = original.clone();
    let rendered = copy.to_string();

    original
        .add_computer(Computer::new("server3.misis.ru"))
        .find_computer_mut("server1.misis.ru")
        .expect("sample has server1")
        .add_address("192.168.1.2");

    assert_eq!(copy.to_string(), rendered);
    assert_eq!(copy.computers().len(), 2);
    assert_ne!(original, copy);
}

#[test]
fn cloned_components_keep_their_variant() {
    let host = Computer::new("h")
        .with_component(Cpu::new(8, 3200))
        .with_component(Memory::new(16000))
        .with_component(Disk::new(StorageKind::SolidState, 1).with_partition(1, "p"));

    let copy = host.clone();
    let kinds: Vec<&str> = copy
        .components()
        .iter()
        .map(|component| match component {
            Component::Cpu(_) => "cpu",
            Component::Memory(_) => "memory",
            Component::Disk(_) => "disk",
        })
        .collect();

    assert_eq!(kinds, ["cpu", "memory", "disk"]);
}

#[test]
fn cloned_disk_partitions_are_independent() {
    let original = Computer::new("h")
        .with_component(Disk::new(StorageKind::Magnetic, 10).with_partition(10, "all"));

    let mut copy = original.clone();
    copy.add_component(Disk::new(StorageKind::Magnetic, 10));

    let Some(Component::Disk(disk)) = original.components().first() else {
        panic!("expected a disk");
    };
    let mut extended = disk.clone();
    extended.add_partition(1, "extra");

    assert_eq!(disk.partitions().len(), 1);
    assert_eq!(extended.partitions().len(), 2);
    assert_eq!(original.components().len(), 1);
}

#[test]
fn solid_state_disk_with_two_partitions() {
    let network = Network::new("TestNet").with_computer(
        Computer::new("server1")
            .with_address("192.168.1.1")
            .with_component(
                Disk::new(StorageKind::SolidState, 1000)
                    .with_partition(500, "system")
                    .with_partition(500, "data"),
            ),
    );

    let server1 = network.find_computer("server1").expect("server1 is present");
    let disk = server1.components()[0].as_disk().expect("first component is a disk");

    assert!(matches!(server1.components()[0], Component::Disk(_)));
    assert_eq!(disk.kind(), StorageKind::SolidState);
    assert_eq!(disk.partitions().len(), 2);
}
