use colored::*;
use rackmap_common::config::Config;
use rackmap_core::{Component, Network, sample};
use tracing::info;

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

pub fn show(cfg: &Config) {
    let network: Network = sample::misis_network();
    info!("Loaded inventory {}", network.name().bold());

    print::tree(&network.to_string());
    print_summary(&network, cfg);
}

/// Host, component and partition totals.
pub fn summary(network: &Network) -> [(&'static str, usize); 3] {
    let hosts = network.computers();
    let components = hosts.iter().map(|host| host.components().len()).sum();
    let partitions = hosts
        .iter()
        .flat_map(|host| host.components())
        .filter_map(Component::as_disk)
        .map(|disk| disk.partitions().len())
        .sum();

    [
        ("Hosts", hosts.len()),
        ("Components", components),
        ("Partitions", partitions),
    ]
}

fn print_summary(network: &Network, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let totals = summary(network);
    let key_width = totals.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(key_width);

    print::fat_separator();
    for (key, count) in totals {
        print::aligned_line(key, count.to_string().bold().green());
    }
}
