//! Shared icon resource registry

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared store of plugin icon resources.
///
/// The initialization pipeline reads icon bytes out of the plugin archive and
/// publishes them here once; dialogs constructed later look icons up by bare
/// name. Cloning the registry produces another handle to the same store, so
/// publisher and consumers can be wired up independently at construction
/// time. The expected discipline is a single publish during initialization
/// followed by any number of reads.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    plugin_name: Option<String>,
    icons: HashMap<String, Vec<u8>>,
}

impl IconRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the plugin name and its icon resources, replacing any
    /// previously published set.
    pub fn publish(&self, plugin_name: impl Into<String>, icons: HashMap<String, Vec<u8>>) {
        let mut inner = self.inner.write();
        inner.plugin_name = Some(plugin_name.into());
        inner.icons = icons;
    }

    /// Name of the plugin that published the current resources, if any.
    #[must_use]
    pub fn plugin_name(&self) -> Option<String> {
        self.inner.read().plugin_name.clone()
    }

    /// Look up an icon's bytes by bare name.
    #[must_use]
    pub fn icon(&self, name: &str) -> Option<Vec<u8>> {
        self.inner.read().icons.get(name).cloned()
    }

    /// Whether an icon with the given name has been published.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().icons.contains_key(name)
    }

    /// Number of published icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().icons.len()
    }

    /// Whether any icons have been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().icons.is_empty()
    }
}
