use crate::inventory::address::Address;
use crate::inventory::component::Component;
use crate::render::{self, Render};

/// A host: its name, the addresses it answers on and the hardware it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Computer {
    name: String,
    addresses: Vec<Address>,
    components: Vec<Component>,
}

impl Computer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn add_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.addresses.push(Address::new(address));
        self
    }

    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.add_address(address);
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl Render for Computer {
    /// Addresses and components form a single sibling list, addresses first.
    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        render::push_line(out, prefix, is_last, format_args!("Host: {}", self.name));

        let children: Vec<&dyn Render> = self
            .addresses
            .iter()
            .map(|address| address as &dyn Render)
            .chain(self.components.iter().map(|component| component as &dyn Render))
            .collect();

        render::push_siblings(out, &render::child_prefix(prefix, is_last), children);
    }
}
