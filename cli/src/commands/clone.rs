use colored::*;
use rackmap_common::config::Config;
use rackmap_core::{Cpu, Network, sample};
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

/// Processor added to the copy to show that the original is left untouched.
const EXTRA_CPU: Cpu = Cpu::new(8, 3600);

pub fn clone(cfg: &Config) {
    let original: Network = sample::misis_network();
    let copy = extended_copy(&original);

    print::tree(&original.to_string());
    mprint!();
    print::tree(&copy.to_string());

    if cfg.quiet > 0 {
        return;
    }

    let rows = [
        ("Original", component_count(&original)),
        ("Copy", component_count(&copy)),
    ];
    GLOBAL_KEY_WIDTH.set(rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0));

    print::fat_separator();
    for (key, count) in rows {
        print::aligned_line(key, format!("{count} components").bold());
    }
}

/// Deep-copies `network` and adds [`EXTRA_CPU`] to the first host of the copy.
pub fn extended_copy(network: &Network) -> Network {
    let mut copy = network.clone();

    // Hosts are only reachable mutably by name; the first host is always the
    // first match for its own name, even when later hosts share it.
    let first = copy.computers().first().map(|host| host.name().to_string());
    let host = match &first {
        Some(name) => copy.find_computer_mut(name),
        None => None,
    };

    match host {
        Some(host) => {
            host.add_component(EXTRA_CPU);
            info!("Added {} to the copy of {}", EXTRA_CPU, host.name());
        }
        None => warn!("{} has no hosts to extend", network.name()),
    }

    copy
}

fn component_count(network: &Network) -> usize {
    network
        .computers()
        .iter()
        .map(|host| host.components().len())
        .sum()
}
