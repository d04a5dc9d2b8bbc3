// File: src/item.rs
// Purpose: Breadcrumb child elements: item, separator, foreign content

use crate::menu::Menu;
use maud::{html, Markup};

/// The closed set of children a breadcrumb accepts.
///
/// `Other` carries arbitrary markup: it renders, but triggers the
/// developer warning when encountered in child-element mode.
#[derive(Debug, Clone)]
pub enum BreadcrumbChild {
    Item(BreadcrumbItem),
    Separator(BreadcrumbSeparator),
    Other(Markup),
}

pub(crate) fn default_separator() -> Markup {
    html! { "/" }
}

/// One breadcrumb segment: link content, an optional dropdown overlay,
/// and a trailing separator.
#[derive(Debug, Clone)]
pub struct BreadcrumbItem {
    content: Markup,
    overlay: Option<Menu>,
    separator: Option<Markup>,
    key: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(content: Markup) -> Self {
        Self {
            content,
            overlay: None,
            separator: None,
            key: None,
        }
    }

    pub fn overlay(mut self, menu: Menu) -> Self {
        self.overlay = Some(menu);
        self
    }

    /// Annotate with the ambient separator. Consumes and returns a new
    /// value, leaving any original the caller cloned from untouched.
    pub fn with_separator(mut self, separator: Markup) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn render(&self, prefix_cls: &str) -> Markup {
        let link = html! {
            span class={ (prefix_cls) "-link" } { (self.content) }
        };
        let link = match &self.overlay {
            Some(menu) => html! {
                span class={ (prefix_cls) "-overlay-link" } {
                    (link)
                    (menu.render(prefix_cls))
                }
            },
            None => link,
        };
        let separator = self
            .separator
            .clone()
            .unwrap_or_else(default_separator);
        html! {
            span data-key=[self.key.as_deref()] {
                (link)
                span class={ (prefix_cls) "-separator" } { (separator) }
            }
        }
    }
}

/// A standalone separator child. Its own content wins over the ambient
/// separator injected by the parent breadcrumb.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbSeparator {
    content: Option<Markup>,
    ambient: Option<Markup>,
    key: Option<String>,
}

impl BreadcrumbSeparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: Markup) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_separator(mut self, separator: Markup) -> Self {
        self.ambient = Some(separator);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn render(&self, prefix_cls: &str) -> Markup {
        let content = self
            .content
            .clone()
            .or_else(|| self.ambient.clone())
            .unwrap_or_else(default_separator);
        html! {
            span class={ (prefix_cls) "-separator" } data-key=[self.key.as_deref()] {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_renders_link_and_separator() {
        let item = BreadcrumbItem::new(html! { "Home" })
            .with_separator(html! { ">" })
            .with_key("home");
        let out = item.render("breadcrumb").into_string();
        assert!(out.contains("data-key=\"home\""));
        assert!(out.contains("breadcrumb-link"));
        assert!(out.contains("&gt;"));
    }

    #[test]
    fn annotation_does_not_mutate_the_original() {
        let item = BreadcrumbItem::new(html! { "Home" });
        let annotated = item.clone().with_separator(html! { ">" }).with_key("0");
        assert!(!item.render("breadcrumb").into_string().contains("data-key"));
        assert!(annotated.render("breadcrumb").into_string().contains("data-key=\"0\""));
    }

    #[test]
    fn item_with_overlay_wraps_link() {
        let item = BreadcrumbItem::new(html! { "Apps" })
            .overlay(Menu::new().item("x", html! { "X" }));
        let out = item.render("breadcrumb").into_string();
        assert!(out.contains("breadcrumb-overlay-link"));
        assert!(out.contains("breadcrumb-menu-item"));
    }

    #[test]
    fn separator_own_content_wins_over_ambient() {
        let sep = BreadcrumbSeparator::new()
            .content(html! { "|" })
            .with_separator(html! { ">" });
        let out = sep.render("breadcrumb").into_string();
        assert!(out.contains('|'));
        assert!(!out.contains("&gt;"));
    }

    #[test]
    fn separator_defaults_to_slash() {
        let out = BreadcrumbSeparator::new().render("breadcrumb").into_string();
        assert!(out.contains('/'));
    }
}
