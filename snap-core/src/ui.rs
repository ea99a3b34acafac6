//! Displayable content handed back to the host.
//!
//! Mirrors the host UI JSON shape (`{"type":"panel","children":[...]}`) so a
//! thin host shim can forward it unchanged.

use serde::Serialize;

/// A leaf component inside a panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    /// Prominent heading line
    Heading {
        /// Heading text
        value: String,
    },
    /// Markdown-capable text line
    Text {
        /// Body text
        value: String,
    },
}

/// Top-level displayable content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Vertical stack of components
    Panel {
        /// Panel children, rendered top to bottom
        children: Vec<Component>,
    },
}

/// Builds a heading component.
pub fn heading(value: impl Into<String>) -> Component {
    Component::Heading {
        value: value.into(),
    }
}

/// Builds a text component.
pub fn text(value: impl Into<String>) -> Component {
    Component::Text {
        value: value.into(),
    }
}

/// Builds a panel from components.
#[must_use]
pub const fn panel(children: Vec<Component>) -> Content {
    Content::Panel { children }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_serializes_to_host_shape() {
        let content = panel(vec![heading("KYC Snap"), text("hello")]);
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["type"], "panel");
        assert_eq!(json["children"][0]["type"], "heading");
        assert_eq!(json["children"][0]["value"], "KYC Snap");
        assert_eq!(json["children"][1]["type"], "text");
    }
}
