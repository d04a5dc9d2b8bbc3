// File: src/menu.rs
// Purpose: Generic dropdown menu used for breadcrumb overlays

use maud::{html, Markup};

/// One entry of a dropdown menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub key: String,
    pub label: Markup,
}

/// A flat dropdown menu. Positioning is left to the consumer's CSS.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, key: impl Into<String>, label: Markup) -> Self {
        self.items.push(MenuItem {
            key: key.into(),
            label,
        });
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self, prefix_cls: &str) -> Markup {
        html! {
            ul class={ (prefix_cls) "-menu" } {
                @for item in &self.items {
                    li class={ (prefix_cls) "-menu-item" } data-key=(item.key) {
                        (item.label)
                    }
                }
            }
        }
    }
}
