/// Icon families recognised by name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    FontAwesome,
    Glyphicon,
    /// Anything else, used as a literal class.
    Literal,
}

impl IconSet {
    pub fn classify(name: &str) -> Self {
        if name.starts_with("fa-") {
            IconSet::FontAwesome
        } else if name.starts_with("glyphicon-") {
            IconSet::Glyphicon
        } else {
            IconSet::Literal
        }
    }

    fn base_class(self) -> Option<&'static str> {
        match self {
            IconSet::FontAwesome => Some("fa"),
            IconSet::Glyphicon => Some("glyphicon"),
            IconSet::Literal => None,
        }
    }
}

/// Class list for an icon name: `fa fa-eye`, `glyphicon glyphicon-boat`, or the name itself.
pub fn icon_classes(name: &str) -> String {
    match IconSet::classify(name).base_class() {
        Some(base) => format!("{} {}", base, name),
        None => name.to_string(),
    }
}

/// `<i>` element for an icon name. Blank names render nothing.
pub fn icon_html(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }
    format!(
        r#"<i class="{}"></i>"#,
        crate::markup::escape_attr(&icon_classes(name))
    )
}
