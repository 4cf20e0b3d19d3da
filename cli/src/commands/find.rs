use rackmap_common::config::Config;
use rackmap_core::{Render, sample};
use tracing::{info, warn};

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

pub fn find(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let network = sample::misis_network();

    let Some(host) = network.find_computer(name) else {
        warn!("No host named '{}' in {}", name, network.name());
        if cfg.quiet == 0 {
            print::no_results();
        }
        anyhow::bail!("no host named '{name}'");
    };

    info!(
        "Found {} with {} addresses and {} components",
        host.name(),
        host.addresses().len(),
        host.components().len()
    );
    print::tree(&host.render("", true));

    if cfg.quiet == 0 {
        GLOBAL_KEY_WIDTH.set("Network".len());
        print::fat_separator();
        print::aligned_line("Network", network.name());
        print::aligned_line("Host", host.name());
    }
    Ok(())
}
