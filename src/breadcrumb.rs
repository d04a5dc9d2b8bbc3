// File: src/breadcrumb.rs
// Purpose: Breadcrumb component: route-driven and child-element rendering

use crate::config::ConfigProvider;
use crate::item::{default_separator, BreadcrumbChild, BreadcrumbItem};
use crate::menu::Menu;
use crate::route::{add_child_path, get_breadcrumb_name, get_path, Params, Route};
use crate::warning::warning;
use maud::{html, Markup};

/// Arguments handed to an item-render callback for one segment.
pub struct ItemRenderArgs<'a> {
    pub route: &'a Route,
    pub params: &'a Params,
    pub routes: &'a [Route],
    /// Resolved path segments accumulated left to right, up to and
    /// including this route's own segment.
    pub paths: &'a [String],
}

pub type ItemRenderFn = Box<dyn Fn(ItemRenderArgs<'_>) -> Markup>;

/// Default per-segment renderer: the last route (by identity against
/// `routes.last()`) renders as plain text, every other route as a link
/// to the accumulated path.
pub fn default_item_render(args: ItemRenderArgs<'_>) -> Markup {
    let is_last = args
        .routes
        .last()
        .is_some_and(|last| std::ptr::eq(last, args.route));
    let name = get_breadcrumb_name(args.route, args.params);
    if is_last {
        html! {
            span { @if let Some(name) = &name { (name) } }
        }
    } else {
        html! {
            a href={ "#/" (args.paths.join("/")) } {
                @if let Some(name) = &name { (name) }
            }
        }
    }
}

/// Breadcrumb navigation component.
///
/// Two input modes funnel into one rendering path: a route-descriptor
/// array (`routes`) or explicit child elements (`child`). A non-empty
/// route array wins; with neither, an empty container renders.
///
/// ```
/// use crumbtrail::{Breadcrumb, ConfigProvider, Route};
///
/// let html = Breadcrumb::new()
///     .routes(vec![
///         Route::new("/", "Home"),
///         Route::new("/users", "Users"),
///     ])
///     .render(&ConfigProvider::new());
/// assert!(html.into_string().starts_with("<div class=\"breadcrumb\">"));
/// ```
#[derive(Default)]
pub struct Breadcrumb {
    prefix_cls: Option<String>,
    routes: Vec<Route>,
    params: Params,
    separator: Option<Markup>,
    item_render: Option<ItemRenderFn>,
    slot_separator: Option<Markup>,
    slot_item_render: Option<ItemRenderFn>,
    children: Vec<BreadcrumbChild>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the root class prefix.
    pub fn prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    pub fn routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = routes;
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn separator(mut self, separator: Markup) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn item_render<F>(mut self, item_render: F) -> Self
    where
        F: Fn(ItemRenderArgs<'_>) -> Markup + 'static,
    {
        self.item_render = Some(Box::new(item_render));
        self
    }

    /// Separator supplied as slot content. A direct `separator` call
    /// takes precedence.
    pub fn separator_slot(mut self, separator: Markup) -> Self {
        self.slot_separator = Some(separator);
        self
    }

    /// Item renderer supplied as slot content. A direct `item_render`
    /// call takes precedence.
    pub fn item_render_slot<F>(mut self, item_render: F) -> Self
    where
        F: Fn(ItemRenderArgs<'_>) -> Markup + 'static,
    {
        self.slot_item_render = Some(Box::new(item_render));
        self
    }

    pub fn child(mut self, child: BreadcrumbChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<BreadcrumbChild>) -> Self {
        self.children = children;
        self
    }

    /// Render the breadcrumb trail into markup.
    pub fn render(&self, config: &ConfigProvider) -> Markup {
        let prefix_cls = config.prefix_cls("breadcrumb", self.prefix_cls.as_deref());
        let separator = self
            .separator
            .clone()
            .or_else(|| self.slot_separator.clone())
            .unwrap_or_else(default_separator);
        let item_render: &dyn Fn(ItemRenderArgs<'_>) -> Markup =
            match (&self.item_render, &self.slot_item_render) {
                (Some(direct), _) => direct.as_ref(),
                (None, Some(slot)) => slot.as_ref(),
                (None, None) => &default_item_render,
            };

        let crumbs = if !self.routes.is_empty() {
            self.gen_for_routes(&prefix_cls, &separator, item_render)
        } else if !self.children.is_empty() {
            self.gen_for_children(&prefix_cls, &separator)
        } else {
            Vec::new()
        };

        html! {
            div class=(prefix_cls) {
                @for crumb in &crumbs {
                    (crumb)
                }
            }
        }
    }

    /// Expand the route array into one breadcrumb item per route.
    ///
    /// Resolved paths accumulate strictly left to right within this
    /// pass; each route sees a snapshot of everything resolved before
    /// it, never anything after.
    fn gen_for_routes(
        &self,
        prefix_cls: &str,
        separator: &Markup,
        item_render: &dyn Fn(ItemRenderArgs<'_>) -> Markup,
    ) -> Vec<Markup> {
        let mut crumbs = Vec::with_capacity(self.routes.len());
        let mut paths: Vec<String> = Vec::new();
        for route in &self.routes {
            let path = get_path(&route.path, &self.params);
            if !path.is_empty() {
                paths.push(path.clone());
            }
            let temp_paths = paths.clone();

            let overlay = if route.children.is_empty() {
                None
            } else {
                let mut menu = Menu::new();
                for child in &route.children {
                    let key = if child.path.is_empty() {
                        child.breadcrumb_name.clone()
                    } else {
                        child.path.clone()
                    };
                    let label = item_render(ItemRenderArgs {
                        route: child,
                        params: &self.params,
                        routes: &self.routes,
                        paths: &add_child_path(&temp_paths, &child.path, &self.params),
                    });
                    menu = menu.item(key, label);
                }
                Some(menu)
            };

            let key = if path.is_empty() {
                route.breadcrumb_name.clone()
            } else {
                path
            };
            let label = item_render(ItemRenderArgs {
                route,
                params: &self.params,
                routes: &self.routes,
                paths: &temp_paths,
            });
            let mut item = BreadcrumbItem::new(label)
                .with_separator(separator.clone())
                .with_key(key);
            if let Some(menu) = overlay {
                item = item.overlay(menu);
            }
            crumbs.push(item.render(prefix_cls));
        }
        crumbs
    }

    /// Annotate explicit children with the ambient separator and a
    /// positional key. Foreign children warn but still render.
    fn gen_for_children(&self, prefix_cls: &str, separator: &Markup) -> Vec<Markup> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                warning(
                    matches!(
                        child,
                        BreadcrumbChild::Item(_) | BreadcrumbChild::Separator(_)
                    ),
                    "Breadcrumb",
                    "only accepts BreadcrumbItem and BreadcrumbSeparator as children",
                );
                match child {
                    BreadcrumbChild::Item(item) => item
                        .clone()
                        .with_separator(separator.clone())
                        .with_key(index.to_string())
                        .render(prefix_cls),
                    BreadcrumbChild::Separator(sep) => sep
                        .clone()
                        .with_separator(separator.clone())
                        .with_key(index.to_string())
                        .render(prefix_cls),
                    BreadcrumbChild::Other(markup) => html! {
                        span data-key=(index) {
                            (markup)
                            span class={ (prefix_cls) "-separator" } { (separator) }
                        }
                    },
                }
            })
            .collect()
    }
}
