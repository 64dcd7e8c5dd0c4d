//! Exposes the form widgets to tera templates.
//!
//! ```text
//! {{ input(label="Email", model="user.email", required=true) }}
//! {{ select(label="Colour", model="user.colour", lookuplist="['red', 'green']") }}
//! {% set steps = process_steps(process_steps=3, active=true) %}
//! ```

use log::debug;
use ox_forms::{process_steps, FormEngine, ProcessSteps, RenderContext, TypeRegistry, WidgetDefinition};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Context, Function, Tera};

#[cfg(test)]
mod tests;

pub const PROCESS_STEPS_TEMPLATE_NAME: &str = "ox_forms/process_steps.html";
const PROCESS_STEPS_TEMPLATE: &str = include_str!("../templates/process_steps.html");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormTagOptions {
    /// Form-name scope applied to every tag that does not pass `form=`.
    #[serde(default)]
    pub form_name: Option<String>,
}

/// One widget exposed as a tera function.
pub struct WidgetTag {
    kind: &'static str,
    registry: Arc<TypeRegistry>,
    form_name: Option<String>,
}

impl WidgetTag {
    pub fn new(kind: &'static str, registry: Arc<TypeRegistry>, form_name: Option<String>) -> Self {
        Self {
            kind,
            registry,
            form_name,
        }
    }

    fn widget_from_args(&self, args: &HashMap<String, Value>) -> tera::Result<WidgetDefinition> {
        let accepted = WidgetDefinition::argument_names(self.kind)
            .ok_or_else(|| tera::Error::msg(format!("unknown widget '{}'", self.kind)))?;
        let mut unknown: Vec<&str> = args
            .keys()
            .map(String::as_str)
            .filter(|key| !accepted.iter().any(|name| name == key))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(tera::Error::msg(format!(
                "{}: unknown argument '{}', expected one of: {}",
                self.kind,
                unknown.join("', '"),
                accepted.join(", ")
            )));
        }

        let mut map: Map<String, Value> = args.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        map.insert("widget".to_string(), Value::String(self.kind.to_string()));
        serde_json::from_value(Value::Object(map))
            .map_err(|e| tera::Error::msg(format!("{}: invalid arguments: {}", self.kind, e)))
    }
}

impl Function for WidgetTag {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let widget = self.widget_from_args(args)?;
        let ctx = RenderContext {
            form_name: self.form_name.as_deref(),
        };
        FormEngine::new(&self.registry)
            .render_widget(&widget, &ctx)
            .map(Value::String)
            .map_err(|e| tera::Error::msg(format!("{}: {}", self.kind, e)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// `process_steps(...)` returning the progress-indicator context as an object.
pub struct ProcessStepsTag;

impl Function for ProcessStepsTag {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let map: Map<String, Value> = args.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let steps: ProcessSteps = serde_json::from_value(Value::Object(map))
            .map_err(|e| tera::Error::msg(format!("process_steps: invalid arguments: {}", e)))?;
        serde_json::to_value(process_steps(&steps)).map_err(tera::Error::json)
    }
}

/// Register every widget of `registry`, `process_steps`, and the progress-indicator template.
pub fn register_form_tags_with(
    tera: &mut Tera,
    registry: Arc<TypeRegistry>,
    options: FormTagOptions,
) -> tera::Result<()> {
    for kind in WidgetDefinition::NAMES {
        if registry.get_element_renderer(kind).is_none() {
            continue;
        }
        tera.register_function(kind, WidgetTag::new(kind, registry.clone(), options.form_name.clone()));
        debug!("Registered tera function '{}'", kind);
    }
    tera.register_function("process_steps", ProcessStepsTag);
    tera.add_raw_template(PROCESS_STEPS_TEMPLATE_NAME, PROCESS_STEPS_TEMPLATE)?;
    Ok(())
}

/// Same as [`register_form_tags_with`] using the standard renderers.
pub fn register_form_tags(tera: &mut Tera, options: FormTagOptions) -> tera::Result<()> {
    register_form_tags_with(tera, Arc::new(ox_forms_std_renderers::standard_registry()), options)
}

/// Render the progress indicator through its template.
pub fn render_process_steps(tera: &Tera, steps: &ProcessSteps) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("steps", &process_steps(steps));
    tera.render(PROCESS_STEPS_TEMPLATE_NAME, &context)
}
