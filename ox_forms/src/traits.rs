use crate::error::FormError;
use crate::schema::WidgetDefinition;

/// Context passed to renderers
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// Enclosing form name, used when a field does not name its own.
    pub form_name: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_form(form_name: &'a str) -> Self {
        Self {
            form_name: Some(form_name),
        }
    }
}

pub trait ElementRenderer: Send + Sync {
    /// Returns list of widget names this renderer handles (e.g., ["input"])
    fn handled_widgets(&self) -> Vec<String>;

    /// Render the widget to a string (HTML)
    fn render(&self, widget: &WidgetDefinition, ctx: &RenderContext) -> Result<String, FormError>;
}
