#![cfg(test)]
use rackmap_core::{Computer, Cpu, Disk, Memory, Network, Render, StorageKind, sample};

/// Checks every non-root line: only the last of each sibling group uses a corner.
fn assert_connectors(rendered: &str) {
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[0].starts_with("Network: "), "root line has a connector: {}", lines[0]);

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let depth = glyph_start(line);
        let is_corner = line[depth..].starts_with("\\-");
        assert!(is_corner || line[depth..].starts_with("+-"), "no connector: {line}");

        // The next line at the same depth, if any before a shallower one, is a sibling.
        let has_next_sibling = lines[idx + 1..]
            .iter()
            .map(|next| glyph_start(next))
            .take_while(|next_depth| *next_depth >= depth)
            .any(|next_depth| next_depth == depth);

        assert_eq!(is_corner, !has_next_sibling, "wrong connector on: {line}");
    }
}

fn glyph_start(line: &str) -> usize {
    let mut depth = 0;
    while matches!(line.get(depth..depth + 2), Some("| ") | Some("  ")) {
        depth += 2;
    }
    depth
}

#[test]
fn magnetic_scenario_matches_exactly() {
    let expected = "\
Network: MISIS network
+-Host: server1.misis.ru
| +-192.168.1.1
| +-CPU, 4 cores @ 2500MHz
| \\-Memory, 16000 MiB
\\-Host: server2.misis.ru
  +-10.0.0.1
  +-CPU, 8 cores @ 3200MHz
  \\-HDD, 2000 GiB
    +-[0]: 500 GiB, system
    \\-[1]: 1500 GiB, data
";
    assert_eq!(sample::misis_network().to_string(), expected);
}

#[test]
fn builder_by_reference_matches_owned_builder() {
    let mut network = Network::new("MISIS network");

    let mut server1 = Computer::new("server1.misis.ru");
    server1
        .add_address("192.168.1.1")
        .add_component(Cpu::new(4, 2500))
        .add_component(Memory::new(16000));

    let mut disk = Disk::new(StorageKind::Magnetic, 2000);
    disk.add_partition(500, "system").add_partition(1500, "data");

    let mut server2 = Computer::new("server2.misis.ru");
    server2
        .add_address("10.0.0.1")
        .add_component(Cpu::new(8, 3200))
        .add_component(disk);

    network.add_computer(server1).add_computer(server2);

    assert_eq!(network, sample::misis_network());
    assert_eq!(network.to_string(), sample::misis_network().to_string());
}

#[test]
fn every_line_is_terminated() {
    let rendered = sample::misis_network().to_string();
    assert!(rendered.ends_with('\n'));
    assert_eq!(rendered.matches('\n').count(), rendered.lines().count());
}

#[test]
fn connectors_follow_sibling_position() {
    let network = Network::new("wide")
        .with_computer(
            Computer::new("a")
                .with_address("10.0.0.1")
                .with_address("10.0.0.2")
                .with_component(
                    Disk::new(StorageKind::SolidState, 100)
                        .with_partition(40, "x")
                        .with_partition(60, "y"),
                )
                .with_component(Memory::new(1)),
        )
        .with_computer(Computer::new("b"))
        .with_computer(
            Computer::new("c")
                .with_component(Disk::new(StorageKind::Magnetic, 5).with_partition(5, "only")),
        );

    assert_connectors(&network.to_string());
    assert_connectors(&sample::misis_network().to_string());
}

#[test]
fn partitions_are_indexed_by_position() {
    let disk = Disk::new(StorageKind::SolidState, 3)
        .with_partition(1, "zeta")
        .with_partition(1, "alpha")
        .with_partition(1, "zeta");
    let rendered = disk.render("", true);

    let labels: Vec<&str> = rendered.lines().skip(1).map(|line| &line[4..]).collect();
    assert_eq!(labels, ["[0]: 1 GiB, zeta", "[1]: 1 GiB, alpha", "[2]: 1 GiB, zeta"]);
}

#[test]
fn solid_state_disk_is_labelled_ssd() {
    let network = Network::new("n").with_computer(
        Computer::new("h").with_component(Disk::new(StorageKind::SolidState, 2000)),
    );
    assert_eq!(network.to_string(), "Network: n\n\\-Host: h\n  \\-SSD, 2000 GiB\n");
}

#[test]
fn out_of_range_values_are_rendered_verbatim() {
    let network = Network::new("odd").with_computer(
        Computer::new("")
            .with_address("")
            .with_component(Cpu::new(0, 0))
            .with_component(Memory::new(-1))
            .with_component(Disk::new(StorageKind::Magnetic, -10).with_partition(-5, "")),
    );

    assert_eq!(
        network.to_string(),
        "Network: odd\n\
         \\-Host: \n\
         \x20 +-\n\
         \x20 +-CPU, 0 cores @ 0MHz\n\
         \x20 +-Memory, -1 MiB\n\
         \x20 \\-HDD, -10 GiB\n\
         \x20   \\-[0]: -5 GiB, \n"
    );
}
