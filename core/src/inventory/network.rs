use std::fmt;

use tracing::{debug, trace};

use crate::inventory::computer::Computer;
use crate::render::{self, Render};

/// Root of the inventory: a named network and the computers it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    name: String,
    computers: Vec<Computer>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            computers: Vec::new(),
        }
    }

    pub fn add_computer(&mut self, computer: Computer) -> &mut Self {
        debug!(network = %self.name, host = %computer.name(), "host added");
        self.computers.push(computer);
        self
    }

    pub fn with_computer(mut self, computer: Computer) -> Self {
        self.add_computer(computer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    /// Returns the first computer named exactly `name`.
    ///
    /// Names are not unique; later computers sharing a name are never returned.
    pub fn find_computer(&self, name: &str) -> Option<&Computer> {
        let found = self.computers.iter().find(|computer| computer.name() == name);
        log_lookup(&self.name, name, found.is_some());
        found
    }

    /// Mutable counterpart of [`Network::find_computer`].
    pub fn find_computer_mut(&mut self, name: &str) -> Option<&mut Computer> {
        let found = self.computers.iter_mut().find(|computer| computer.name() == name);
        log_lookup(&self.name, name, found.is_some());
        found
    }
}

fn log_lookup(network: &str, name: &str, hit: bool) {
    if hit {
        trace!(network, host = name, "host found");
    } else {
        debug!(network, host = name, "no such host");
    }
}

impl Render for Network {
    /// The network is always the root: it draws no connector and its computers
    /// start from an empty prefix, whatever `prefix` and `is_last` say.
    fn render_into(&self, out: &mut String, _prefix: &str, _is_last: bool) {
        out.push_str("Network: ");
        out.push_str(&self.name);
        out.push('\n');

        render::push_siblings(out, "", self.computers.iter().map(|c| c as &dyn Render));
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("", false))
    }
}
