//! Capability provider abstraction
//!
//! A provider is an optional plugin that supplies enhanced implementations of
//! up to three functions. Each function slot is independently optional, and
//! the whole provider may be absent. Plugins are compiled in and listed in
//! [`PLUGINS`]; [`discover`] resolves the configured package once at startup
//! into an immutable [`Capabilities`] descriptor.

use std::fmt;

use crate::config::ProviderConfig;
use crate::stats::StatsRecord;

mod tiny_utils;

pub type GreetingFn = fn(&str) -> String;
pub type FormatTextFn = fn(&str, &str) -> String;
pub type StatsFn = fn(&[f64]) -> Result<StatsRecord, String>;

pub const VERSION_NOT_SPECIFIED: &str = "version not specified";

/// Named function slots a provider may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    GenerateGreeting,
    FormatText,
    CalculateStats,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::GenerateGreeting,
        Capability::FormatText,
        Capability::CalculateStats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::GenerateGreeting => "generate_greeting",
            Capability::FormatText => "format_text",
            Capability::CalculateStats => "calculate_stats",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Function slots registered by a plugin
#[derive(Debug, Clone, Default)]
pub struct Provider {
    version: Option<String>,
    generate_greeting: Option<GreetingFn>,
    format_text: Option<FormatTextFn>,
    calculate_stats: Option<StatsFn>,
}

impl Provider {
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(VERSION_NOT_SPECIFIED)
    }

    pub fn generate_greeting(&self) -> Option<GreetingFn> {
        self.generate_greeting
    }

    pub fn format_text(&self) -> Option<FormatTextFn> {
        self.format_text
    }

    pub fn calculate_stats(&self) -> Option<StatsFn> {
        self.calculate_stats
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::GenerateGreeting => self.generate_greeting.is_some(),
            Capability::FormatText => self.format_text.is_some(),
            Capability::CalculateStats => self.calculate_stats.is_some(),
        }
    }

    /// Names of the populated slots, sorted alphabetically
    pub fn exposed_functions(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Capability::ALL
            .into_iter()
            .filter(|c| self.has(*c))
            .map(Capability::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Drop every slot not in `allowed`
    fn retain(&mut self, allowed: &[Capability]) {
        if !allowed.contains(&Capability::GenerateGreeting) {
            self.generate_greeting = None;
        }
        if !allowed.contains(&Capability::FormatText) {
            self.format_text = None;
        }
        if !allowed.contains(&Capability::CalculateStats) {
            self.calculate_stats = None;
        }
    }
}

/// Registration handle passed to each plugin
#[derive(Debug, Default)]
pub struct ProviderBuilder {
    provider: Provider,
}

impl ProviderBuilder {
    pub fn version(mut self, version: &str) -> Self {
        self.provider.version = Some(version.to_string());
        self
    }

    pub fn generate_greeting(mut self, f: GreetingFn) -> Self {
        self.provider.generate_greeting = Some(f);
        self
    }

    pub fn format_text(mut self, f: FormatTextFn) -> Self {
        self.provider.format_text = Some(f);
        self
    }

    pub fn calculate_stats(mut self, f: StatsFn) -> Self {
        self.provider.calculate_stats = Some(f);
        self
    }

    pub fn build(self) -> Provider {
        self.provider
    }
}

/// A compiled-in plugin that can be discovered by package name
pub struct PluginEntry {
    pub package: &'static str,
    pub register: fn(ProviderBuilder) -> ProviderBuilder,
}

pub const PLUGINS: &[PluginEntry] = &[PluginEntry {
    package: tiny_utils::PACKAGE_NAME,
    register: tiny_utils::register,
}];

pub const DEFAULT_PACKAGE: &str = tiny_utils::PACKAGE_NAME;

/// Immutable result of provider discovery
#[derive(Debug, Clone)]
pub struct Capabilities {
    package: String,
    provider: Option<Provider>,
}

impl Capabilities {
    pub fn unavailable(package: &str) -> Self {
        Self {
            package: package.to_string(),
            provider: None,
        }
    }

    pub fn with_provider(package: &str, provider: Provider) -> Self {
        Self {
            package: package.to_string(),
            provider: Some(provider),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }
}

/// Resolve the configured package against the built-in plugin catalog
pub fn discover(config: &ProviderConfig) -> Capabilities {
    discover_in(PLUGINS, config)
}

pub fn discover_in(catalog: &[PluginEntry], config: &ProviderConfig) -> Capabilities {
    let package = config.package.as_str();

    if !config.enabled {
        log::debug!("Provider '{}' disabled by configuration", package);
        return Capabilities::unavailable(package);
    }

    let Some(entry) = catalog.iter().find(|p| p.package == package) else {
        log::debug!("Provider '{}' not found", package);
        return Capabilities::unavailable(package);
    };

    let mut provider = (entry.register)(Provider::builder()).build();

    if let Some(functions) = &config.functions {
        let allowed: Vec<Capability> = functions
            .iter()
            .filter_map(|name| {
                let capability = Capability::from_name(name);
                if capability.is_none() {
                    log::warn!("Ignoring unknown provider function '{}'", name);
                }
                capability
            })
            .collect();
        provider.retain(&allowed);
    }

    log::debug!(
        "Provider '{}' {} loaded with [{}]",
        package,
        provider.version(),
        provider.exposed_functions().join(", ")
    );

    Capabilities::with_provider(package, provider)
}
