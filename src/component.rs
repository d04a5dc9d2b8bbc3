// File: src/component.rs
// Purpose: Component trait for dynamic, JSON-props rendering

use crate::breadcrumb::Breadcrumb;
use crate::config::ConfigProvider;
use crate::route::{Params, Route};
use anyhow::{Context, Result};
use maud::html;
use serde::Deserialize;

/// Trait for components that can be rendered from untyped props
pub trait Component: Send + Sync {
    /// Get the component name
    fn name(&self) -> &'static str;

    /// Render the component with the given props JSON
    fn render(&self, props: serde_json::Value) -> Result<String>;

    /// Check if this is a public component (accessible over the wire)
    fn is_public(&self) -> bool;
}

/// Wire shape of breadcrumb props, camelCase to match the route
/// descriptors (`breadcrumbName`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BreadcrumbProps {
    prefix_cls: Option<String>,
    routes: Vec<Route>,
    params: Params,
    separator: Option<String>,
}

/// Breadcrumb exposed through the dynamic component interface.
pub struct BreadcrumbComponent {
    config: ConfigProvider,
}

impl BreadcrumbComponent {
    pub fn new(config: ConfigProvider) -> Self {
        Self { config }
    }
}

impl Component for BreadcrumbComponent {
    fn name(&self) -> &'static str {
        "breadcrumb"
    }

    fn render(&self, props: serde_json::Value) -> Result<String> {
        let props: BreadcrumbProps =
            serde_json::from_value(props).context("Invalid breadcrumb props")?;
        let mut breadcrumb = Breadcrumb::new().routes(props.routes).params(props.params);
        if let Some(prefix_cls) = props.prefix_cls {
            breadcrumb = breadcrumb.prefix_cls(prefix_cls);
        }
        if let Some(separator) = props.separator {
            breadcrumb = breadcrumb.separator(html! { (separator) });
        }
        Ok(breadcrumb.render(&self.config).into_string())
    }

    fn is_public(&self) -> bool {
        true
    }
}
