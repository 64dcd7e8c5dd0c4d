use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

fn default_input_type() -> String {
    "text".to_string()
}

fn default_rows() -> u32 {
    3
}

fn default_date_format() -> String {
    "yyyy-MM-dd".to_string()
}

/// Arguments every field widget accepts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Visible label text.
    pub label: String,
    /// Client-side binding target (e.g. `user.email`).
    pub model: String,
    /// Expression hiding the whole form group when truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<String>,
    /// Expression showing the whole form group only when truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<String>,
    /// `fa-*`, `glyphicon-*` or a literal class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Expression disabling the control when truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Form-name scope. Takes precedence over the scope of the render context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

impl FieldOptions {
    pub const ARGUMENTS: [&'static str; 8] =
        ["label", "model", "hide", "show", "icon", "disabled", "required", "form"];

    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            model: model.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    /// HTML input type, `text` unless told otherwise.
    #[serde(rename = "type", default = "default_input_type")]
    pub input_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl InputConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }
}

impl From<FieldOptions> for InputConfig {
    fn from(field: FieldOptions) -> Self {
        Self {
            field,
            input_type: default_input_type(),
            placeholder: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TextareaConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextareaConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }
}

impl From<FieldOptions> for TextareaConfig {
    fn from(field: FieldOptions) -> Self {
        Self {
            field,
            rows: default_rows(),
            placeholder: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    /// Client-side list expression the options are populated from,
    /// passed through untouched (e.g. `['red', 'green']` or `vm.colours`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookuplist: Option<String>,
}

impl SelectConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }
}

impl From<FieldOptions> for SelectConfig {
    fn from(field: FieldOptions) -> Self {
        Self {
            field,
            lookuplist: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckboxConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
}

impl CheckboxConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }
}

impl From<FieldOptions> for CheckboxConfig {
    fn from(field: FieldOptions) -> Self {
        Self { field }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RadioConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    /// Value written to the model when selected. Falls back to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RadioConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }

    pub fn effective_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.field.label)
    }
}

impl From<FieldOptions> for RadioConfig {
    fn from(field: FieldOptions) -> Self {
        Self { field, value: None }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DatepickerConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    /// Earliest selectable date, emitted as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mindate: Option<String>,
    #[serde(default = "default_date_format")]
    pub format: String,
}

impl DatepickerConfig {
    pub fn new(label: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from(FieldOptions::new(label, model))
    }
}

impl From<FieldOptions> for DatepickerConfig {
    fn from(field: FieldOptions) -> Self {
        Self {
            field,
            mindate: None,
            format: default_date_format(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IconConfig {
    pub name: String,
}

impl IconConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One widget invocation, tagged by its widget name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum WidgetDefinition {
    Input(InputConfig),
    Textarea(TextareaConfig),
    Select(SelectConfig),
    Checkbox(CheckboxConfig),
    Radio(RadioConfig),
    Datepicker(DatepickerConfig),
    Icon(IconConfig),
}

impl WidgetDefinition {
    pub const NAMES: [&'static str; 7] = [
        "input",
        "textarea",
        "select",
        "checkbox",
        "radio",
        "datepicker",
        "icon",
    ];

    /// Widget name, also the registry key of its renderer.
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetDefinition::Input(_) => "input",
            WidgetDefinition::Textarea(_) => "textarea",
            WidgetDefinition::Select(_) => "select",
            WidgetDefinition::Checkbox(_) => "checkbox",
            WidgetDefinition::Radio(_) => "radio",
            WidgetDefinition::Datepicker(_) => "datepicker",
            WidgetDefinition::Icon(_) => "icon",
        }
    }

    /// Arguments a widget accepts, shared field arguments first; `None` for an unknown widget.
    pub fn argument_names(kind: &str) -> Option<Vec<&'static str>> {
        let extra: &[&'static str] = match kind {
            "input" => &["type", "placeholder"],
            "textarea" => &["rows", "placeholder"],
            "select" => &["lookuplist"],
            "checkbox" => &[],
            "radio" => &["value"],
            "datepicker" => &["mindate", "format"],
            "icon" => return Some(vec!["name"]),
            _ => return None,
        };
        Some(FieldOptions::ARGUMENTS.iter().chain(extra).copied().collect())
    }

    /// Shared field arguments; `None` for widgets that are not form fields.
    pub fn field(&self) -> Option<&FieldOptions> {
        match self {
            WidgetDefinition::Input(c) => Some(&c.field),
            WidgetDefinition::Textarea(c) => Some(&c.field),
            WidgetDefinition::Select(c) => Some(&c.field),
            WidgetDefinition::Checkbox(c) => Some(&c.field),
            WidgetDefinition::Radio(c) => Some(&c.field),
            WidgetDefinition::Datepicker(c) => Some(&c.field),
            WidgetDefinition::Icon(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDefinition {
    /// Form name; becomes the form-name scope of every field.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(default)]
    pub fields: Vec<WidgetDefinition>,
}

impl FormDefinition {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|e| FormError::Parse(e.to_string()))
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| FormError::Parse(e.to_string()))
    }
}
