use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::ElementRenderer;

#[derive(Default)]
pub struct TypeRegistry {
    /// Maps widget names (e.g. "select") to actual renderers
    element_renderers: HashMap<String, Arc<dyn ElementRenderer>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            element_renderers: HashMap::new(),
        }
    }

    /// Register under an explicit name. A later registration replaces an earlier one.
    pub fn register_element_renderer(&mut self, name: &str, renderer: Arc<dyn ElementRenderer>) {
        if self.element_renderers.insert(name.to_string(), renderer).is_some() {
            warn!("Renderer for widget '{}' replaced", name);
        } else {
            debug!("Registered renderer for widget '{}'", name);
        }
    }

    /// Register under every name the renderer reports.
    pub fn register(&mut self, renderer: Arc<dyn ElementRenderer>) {
        for name in renderer.handled_widgets() {
            self.register_element_renderer(&name, renderer.clone());
        }
    }

    pub fn get_element_renderer(&self, widget_name: &str) -> Option<Arc<dyn ElementRenderer>> {
        self.element_renderers.get(widget_name).cloned()
    }

    pub fn widget_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.element_renderers.keys().cloned().collect();
        names.sort();
        names
    }
}
