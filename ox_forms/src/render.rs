use log::debug;

use crate::error::{FormError, Result};
use crate::markup::{attr, escape_text};
use crate::registry::TypeRegistry;
use crate::schema::{FormDefinition, WidgetDefinition};
use crate::traits::RenderContext;

pub struct FormEngine<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> FormEngine<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Render a whole form. Its `id` is the form-name scope of every field.
    pub fn render(&self, form: &FormDefinition) -> Result<String> {
        let ctx = RenderContext::in_form(&form.id);
        let content = self.render_widgets(&form.fields, &ctx)?;

        let classes = match form.classes.as_deref() {
            Some(extra) if !extra.trim().is_empty() => format!("form-horizontal {}", extra.trim()),
            _ => "form-horizontal".to_string(),
        };
        let title = form
            .title
            .as_deref()
            .map(|t| format!("<legend>{}</legend>", escape_text(t)))
            .unwrap_or_default();

        Ok(format!(
            r#"<form{name}{classes} novalidate>{title}{content}</form>"#,
            name = attr("name", &form.id),
            classes = attr("class", &classes),
        ))
    }

    pub fn render_widgets(&self, widgets: &[WidgetDefinition], ctx: &RenderContext) -> Result<String> {
        let mut output = String::new();
        for widget in widgets {
            output.push_str(&self.render_widget(widget, ctx)?);
        }
        Ok(output)
    }

    pub fn render_widget(&self, widget: &WidgetDefinition, ctx: &RenderContext) -> Result<String> {
        let kind = widget.kind();
        let renderer = self
            .registry
            .get_element_renderer(kind)
            .ok_or_else(|| FormError::UnknownWidget(kind.to_string()))?;

        debug!("Rendering '{}' widget (form scope: {:?})", kind, ctx.form_name);
        renderer.render(widget, ctx)
    }
}
