// crumbtrail - breadcrumb navigation component
// Route-driven trails with per-segment dropdown overlays, rendered with Maud

pub mod breadcrumb;
pub mod component;
pub mod config;
pub mod item;
pub mod menu;
pub mod route;
pub mod warning;

// Re-export the component surface
pub use breadcrumb::{default_item_render, Breadcrumb, ItemRenderArgs, ItemRenderFn};
pub use component::{BreadcrumbComponent, Component};
pub use config::ConfigProvider;
pub use item::{BreadcrumbChild, BreadcrumbItem, BreadcrumbSeparator};
pub use menu::{Menu, MenuItem};
pub use route::{add_child_path, get_breadcrumb_name, get_path, Params, Route};

// Re-export Maud for templates
pub use maud::{html, Markup, PreEscaped};
