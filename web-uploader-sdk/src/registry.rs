// ABOUTME: Registration of the web uploader with a host uploader registry
// ABOUTME: Supplies the descriptor (id, name, handler, settings fields) and an in-memory registry

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{ConfigField, ConfigSource, config_fields};
use crate::constants::plugin;
use crate::handler::WebUploader;

/// Everything the host needs to list, configure and invoke an uploader.
#[derive(Clone)]
pub struct UploaderDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub handler: Arc<WebUploader>,
    pub config: fn(&dyn ConfigSource) -> Vec<ConfigField>,
}

impl std::fmt::Debug for UploaderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploaderDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}

pub trait UploaderRegistry {
    fn register(&mut self, descriptor: UploaderDescriptor);
}

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    uploaders: BTreeMap<String, UploaderDescriptor>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&UploaderDescriptor> {
        self.uploaders.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.uploaders.keys().map(String::as_str)
    }
}

impl UploaderRegistry for InMemoryRegistry {
    fn register(&mut self, descriptor: UploaderDescriptor) {
        if self.uploaders.contains_key(descriptor.id) {
            log::warn!("Replacing already registered uploader '{}'", descriptor.id);
        }
        self.uploaders.insert(descriptor.id.to_string(), descriptor);
    }
}

impl WebUploader {
    pub fn descriptor(self) -> UploaderDescriptor {
        UploaderDescriptor {
            id: plugin::UPLOADER_ID,
            name: plugin::DISPLAY_NAME,
            handler: Arc::new(self),
            config: config_fields,
        }
    }

    /// Installs this uploader under `web-uploader`
    pub fn register(self, registry: &mut dyn UploaderRegistry) {
        log::debug!("Registering uploader '{}'", plugin::UPLOADER_ID);
        registry.register(self.descriptor());
    }
}
