//! Environment resources - the load balancer in front of an environment and
//! its listeners.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// A protocol/port pair the load balancer accepts traffic on
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Listener {
    protocol: Option<String>,
    port: Option<i32>,
}

impl Listener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    pub fn port(&self) -> Option<i32> {
        self.port
    }

    pub fn set_protocol(&mut self, protocol: Option<String>) {
        self.protocol = protocol;
    }

    pub fn set_port(&mut self, port: Option<i32>) {
        self.port = port;
    }
}

impl ValueHash for Listener {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.protocol)
            .field(&self.port)
            .finish()
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("Protocol", self.protocol())
            .field("Port", self.port.as_ref())
            .finish()
    }
}

/// Load balancer in front of an environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerDescription {
    load_balancer_name: Option<String>,
    domain: Option<String>,
    listeners: Option<Vec<Listener>>,
}

impl LoadBalancerDescription {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_load_balancer_name(mut self, load_balancer_name: impl Into<String>) -> Self {
        self.load_balancer_name = Some(load_balancer_name.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Builder: replace the listeners with a copy of `listeners`
    pub fn with_listeners(mut self, listeners: &[Listener]) -> Self {
        self.set_listeners(Some(listeners));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_listeners_appended(mut self, listeners: &[Listener]) -> Self {
        self.listeners.get_or_insert_with(Vec::new).extend_from_slice(listeners);
        self
    }

    /// Builder: append one listener, creating the list if it is absent
    pub fn with_listener(mut self, listener: Listener) -> Self {
        self.listeners.get_or_insert_with(Vec::new).push(listener);
        self
    }

    // --- Getters ---

    pub fn load_balancer_name(&self) -> Option<&str> {
        self.load_balancer_name.as_deref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn listeners(&self) -> Option<&[Listener]> {
        self.listeners.as_deref()
    }

    // --- Setters ---

    pub fn set_load_balancer_name(&mut self, load_balancer_name: Option<String>) {
        self.load_balancer_name = load_balancer_name;
    }

    pub fn set_domain(&mut self, domain: Option<String>) {
        self.domain = domain;
    }

    /// Replace the listeners with a copy of `listeners` (`None` clears them)
    pub fn set_listeners(&mut self, listeners: Option<&[Listener]>) {
        self.listeners = listeners.map(<[Listener]>::to_vec);
    }
}

impl ValueHash for LoadBalancerDescription {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.load_balancer_name)
            .field(&self.domain)
            .field(&self.listeners)
            .finish()
    }
}

impl fmt::Display for LoadBalancerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("LoadBalancerName", self.load_balancer_name())
            .field("Domain", self.domain())
            .list("Listeners", self.listeners())
            .finish()
    }
}

/// Resources provisioned for an environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvironmentResourcesDescription {
    load_balancer: Option<LoadBalancerDescription>,
}

impl EnvironmentResourcesDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_balancer(mut self, load_balancer: LoadBalancerDescription) -> Self {
        self.load_balancer = Some(load_balancer);
        self
    }

    pub fn load_balancer(&self) -> Option<&LoadBalancerDescription> {
        self.load_balancer.as_ref()
    }

    pub fn set_load_balancer(&mut self, load_balancer: Option<LoadBalancerDescription>) {
        self.load_balancer = load_balancer;
    }
}

impl ValueHash for EnvironmentResourcesDescription {
    fn value_hash(&self) -> i32 {
        HashBuilder::new().field(&self.load_balancer).finish()
    }
}

impl fmt::Display for EnvironmentResourcesDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("LoadBalancer", self.load_balancer())
            .finish()
    }
}
