use log::trace;
use ox_forms::icon::icon_html;
use ox_forms::markup::{attr, escape_attr, optional_attr, FieldMarkup};
use ox_forms::{
    CheckboxConfig, DatepickerConfig, ElementRenderer, FormError, IconConfig, InputConfig,
    RadioConfig, RenderContext, Result, SelectConfig, TextareaConfig, TypeRegistry,
    WidgetDefinition,
};
use std::sync::Arc;

const CALENDAR_ICON: &str = "glyphicon-calendar";

pub fn render_input(config: &InputConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let control = format!(
        r#"<input class="form-control"{input_type}{attrs}{placeholder} />"#,
        input_type = attr("type", &config.input_type),
        attrs = field.control_attrs(),
        placeholder = optional_attr("placeholder", config.placeholder.as_deref()),
    );
    Ok(field.wrap(&field.with_icon_addon(&control)))
}

pub fn render_textarea(config: &TextareaConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let control = format!(
        r#"<textarea class="form-control"{attrs}{rows}{placeholder}></textarea>"#,
        attrs = field.control_attrs(),
        rows = attr("rows", &config.rows.to_string()),
        placeholder = optional_attr("placeholder", config.placeholder.as_deref()),
    );
    Ok(field.wrap(&field.with_icon_addon(&control)))
}

pub fn render_select(config: &SelectConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let options = config
        .lookuplist
        .as_deref()
        .map(|list| attr("ng-options", &format!("option for option in {}", list)))
        .unwrap_or_default();
    let control = format!(
        r#"<select class="form-control"{attrs}{options}></select>"#,
        attrs = field.control_attrs(),
    );
    Ok(field.wrap(&field.with_icon_addon(&control)))
}

pub fn render_checkbox(config: &CheckboxConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let control = format!(r#"<input type="checkbox"{} />"#, field.control_attrs());
    Ok(field.wrap_choice("checkbox", &control))
}

pub fn render_radio(config: &RadioConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let control = format!(
        r#"<input type="radio"{attrs}{value} />"#,
        attrs = field.control_attrs(),
        value = attr("value", config.effective_value()),
    );
    Ok(field.wrap_choice("radio", &control))
}

/// Text input with a popup calendar; the field icon, if any, replaces the calendar glyph.
pub fn render_datepicker(config: &DatepickerConfig, ctx: &RenderContext) -> Result<String> {
    let field = FieldMarkup::prepare(&config.field, ctx)?;
    let opened = format!("{}_opened", field.name());
    let icon = icon_html(config.field.icon.as_deref().unwrap_or(CALENDAR_ICON));
    let control = format!(
        r#"<p class="input-group">
            <input type="text" class="form-control"{attrs}{popup}{is_open}{min_date} />
            <span class="input-group-btn">
                <button type="button" class="btn btn-default" ng-click="{opened} = true">{icon}</button>
            </span>
        </p>"#,
        attrs = field.control_attrs(),
        popup = attr("uib-datepicker-popup", &config.format),
        is_open = attr("is-open", &opened),
        min_date = optional_attr("data-min-date", config.mindate.as_deref()),
        opened = escape_attr(&opened),
    );
    Ok(field.wrap(&control))
}

pub fn render_icon(config: &IconConfig, _ctx: &RenderContext) -> Result<String> {
    Ok(icon_html(&config.name))
}

macro_rules! widget_renderer {
    ($renderer:ident, $name:literal, $variant:ident, $render:ident) => {
        pub struct $renderer;

        impl ElementRenderer for $renderer {
            fn handled_widgets(&self) -> Vec<String> {
                vec![$name.to_string()]
            }

            fn render(&self, widget: &WidgetDefinition, ctx: &RenderContext) -> Result<String> {
                match widget {
                    WidgetDefinition::$variant(config) => {
                        trace!("{} rendering {:?}", stringify!($renderer), config);
                        $render(config, ctx)
                    }
                    other => Err(FormError::WidgetMismatch {
                        expected: $name.to_string(),
                        found: other.kind().to_string(),
                    }),
                }
            }
        }
    };
}

widget_renderer!(InputRenderer, "input", Input, render_input);
widget_renderer!(TextareaRenderer, "textarea", Textarea, render_textarea);
widget_renderer!(SelectRenderer, "select", Select, render_select);
widget_renderer!(CheckboxRenderer, "checkbox", Checkbox, render_checkbox);
widget_renderer!(RadioRenderer, "radio", Radio, render_radio);
widget_renderer!(DatepickerRenderer, "datepicker", Datepicker, render_datepicker);
widget_renderer!(IconRenderer, "icon", Icon, render_icon);

/// Register the renderer of every standard widget.
pub fn register_standard_renderers(registry: &mut TypeRegistry) {
    registry.register(Arc::new(InputRenderer));
    registry.register(Arc::new(TextareaRenderer));
    registry.register(Arc::new(SelectRenderer));
    registry.register(Arc::new(CheckboxRenderer));
    registry.register(Arc::new(RadioRenderer));
    registry.register(Arc::new(DatepickerRenderer));
    registry.register(Arc::new(IconRenderer));
}

pub fn standard_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register_standard_renderers(&mut registry);
    registry
}

