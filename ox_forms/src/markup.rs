//! Attribute and wrapper markup shared by the field widgets.
//!
//! Client-side expressions (`hide`, `show`, `disabled`, `lookuplist`, ...) are
//! emitted verbatim. Only `"` is rewritten so the attribute stays closed.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormError, Result};
use crate::icon::icon_html;
use crate::schema::FieldOptions;
use crate::traits::RenderContext;

static NAME_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

/// Escape text placed between tags.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make a value safe inside a double-quoted attribute without touching expression syntax.
pub fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// ` name="value"`, with a leading space so attributes can be concatenated.
pub fn attr(name: &str, value: &str) -> String {
    format!(r#" {}="{}""#, name, escape_attr(value))
}

/// Same as [`attr`] but renders nothing when the value is absent.
pub fn optional_attr(name: &str, value: Option<&str>) -> String {
    value.map(|v| attr(name, v)).unwrap_or_default()
}

/// Control `id`/`name` derived from a model path: `user.first_name` -> `user_first_name`.
pub fn field_name(model: &str) -> String {
    NAME_UNSAFE.replace_all(model.trim(), "_").into_owned()
}

/// Collapse runs of whitespace to single spaces and drop the space between tags.
pub fn normalize_whitespace(html: &str) -> String {
    html.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("> <", "><")
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Markup pieces of one field widget, validated against its form-name scope.
#[derive(Debug)]
pub struct FieldMarkup<'a> {
    field: &'a FieldOptions,
    name: String,
    form: Option<&'a str>,
}

impl<'a> FieldMarkup<'a> {
    /// Resolve the form-name scope and reject `required` without one.
    pub fn prepare(field: &'a FieldOptions, ctx: &RenderContext<'a>) -> Result<Self> {
        let form = non_blank(field.form.as_deref()).or_else(|| non_blank(ctx.form_name));

        if field.required && form.is_none() {
            return Err(FormError::InvalidConfiguration(format!(
                "field '{}' is required but has no form name to validate against",
                field.model
            )));
        }

        let name = field_name(&field.model);
        trace!("prepared field '{}' (form scope: {:?})", name, form);
        Ok(Self { field, name, form })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn form(&self) -> Option<&'a str> {
        self.form
    }

    pub fn field(&self) -> &'a FieldOptions {
        self.field
    }

    fn required_scope(&self) -> Option<String> {
        match self.form {
            Some(form) if self.field.required => Some(format!("{}.{}", form, self.name)),
            _ => None,
        }
    }

    /// Visibility and validation-state attributes of the `form-group` wrapper.
    pub fn wrapper_attrs(&self) -> String {
        let mut out = String::new();
        out.push_str(&optional_attr("ng-hide", self.field.hide.as_deref()));
        out.push_str(&optional_attr("ng-show", self.field.show.as_deref()));
        if let Some(scope) = self.required_scope() {
            out.push_str(&attr("ng-class", &format!("{{'has-error': {}.$invalid}}", scope)));
        }
        out
    }

    /// `id`, `name`, binding, disabled and required attributes of the control.
    pub fn control_attrs(&self) -> String {
        let mut out = String::new();
        out.push_str(&attr("id", &self.name));
        out.push_str(&attr("name", &self.name));
        out.push_str(&attr("ng-model", &self.field.model));
        out.push_str(&optional_attr("ng-disabled", self.field.disabled.as_deref()));
        if self.field.required {
            out.push_str(" required");
        }
        out
    }

    pub fn label(&self) -> String {
        format!(
            r#"<label class="control-label col-sm-3">{}</label>"#,
            escape_text(&self.field.label)
        )
    }

    pub fn icon(&self) -> String {
        self.field.icon.as_deref().map(icon_html).unwrap_or_default()
    }

    /// Error message shown once the required field is left empty.
    pub fn help_block(&self) -> String {
        match self.required_scope() {
            Some(scope) => format!(
                r#"<p class="help-block" ng-show="{}.$error.required">{} is required</p>"#,
                escape_attr(&scope),
                escape_text(&self.field.label)
            ),
            None => String::new(),
        }
    }

    /// Put the icon, if any, in an input-group addon in front of the control.
    pub fn with_icon_addon(&self, control: &str) -> String {
        let icon = self.icon();
        if icon.is_empty() {
            return control.to_string();
        }
        format!(
            r#"<div class="input-group">
                <span class="input-group-addon">{icon}</span>
                {control}
            </div>"#
        )
    }

    /// Horizontal form group: label column on the left, control column on the right.
    pub fn wrap(&self, control: &str) -> String {
        format!(
            r#"<div class="form-group"{wrapper}>
    {label}
    <div class="col-sm-9">
        {control}
        {help}
    </div>
</div>"#,
            wrapper = self.wrapper_attrs(),
            label = self.label(),
            help = self.help_block(),
        )
    }

    /// Checkbox/radio group: the label wraps the control, offset past the label column.
    pub fn wrap_choice(&self, kind: &str, control: &str) -> String {
        let icon = self.icon();
        let icon = if icon.is_empty() { icon } else { format!("{} ", icon) };
        format!(
            r#"<div class="form-group"{wrapper}>
    <div class="col-sm-offset-3 col-sm-9">
        <div class="{kind}">
            <label>{control} {icon}{label}</label>
        </div>
        {help}
    </div>
</div>"#,
            wrapper = self.wrapper_attrs(),
            label = escape_text(&self.field.label),
            help = self.help_block(),
        )
    }
}
