// File: src/route.rs
// Purpose: Route descriptors and :key token interpolation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substitution values applied to `:key` placeholders in path and
/// name templates. Ordered so the generated alternation is stable.
pub type Params = BTreeMap<String, String>;

/// Data describing one breadcrumb segment.
///
/// `children` lists sibling link options exposed as a dropdown on the
/// segment. An empty `path` or `breadcrumb_name` means "absent".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    pub path: String,
    pub breadcrumb_name: String,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, breadcrumb_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            breadcrumb_name: breadcrumb_name.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }
}

static PATH_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Resolve a path template against `params`.
///
/// Strips a single leading slash, then substitutes every `:key` token
/// whose key is present in `params`. Unknown keys stay literal.
pub fn get_path(path: &str, params: &Params) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    PATH_TOKEN
        .replace_all(path, |caps: &regex::Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Resolve a route's display name against `params`.
///
/// Returns `None` when the route has no name. Tokens are matched
/// against the union of all param keys; keys are regex-escaped before
/// being joined into the alternation, so keys carrying regex
/// metacharacters substitute literally. A matched token whose value is
/// empty stays literal.
pub fn get_breadcrumb_name(route: &Route, params: &Params) -> Option<String> {
    if route.breadcrumb_name.is_empty() {
        return None;
    }
    if params.is_empty() {
        return Some(route.breadcrumb_name.clone());
    }
    let alternation = params
        .keys()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    // Escaped keys always form a valid pattern.
    let token = Regex::new(&format!(":({alternation})")).unwrap();
    let name = token.replace_all(&route.breadcrumb_name, |caps: &regex::Captures| {
        match params.get(&caps[1]).filter(|value| !value.is_empty()) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });
    Some(name.into_owned())
}

/// Return `paths` with the resolved `child_path` appended, skipping
/// segments that resolve to the empty string. The input is not mutated.
pub fn add_child_path(paths: &[String], child_path: &str, params: &Params) -> Vec<String> {
    let mut out = paths.to_vec();
    let path = get_path(child_path, params);
    if !path.is_empty() {
        out.push(path);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_path_substitutes_and_strips_leading_slash() {
        assert_eq!(get_path("/a/:id", &params(&[("id", "5")])), "a/5");
        assert_eq!(get_path("", &Params::new()), "");
    }

    #[test]
    fn get_path_leaves_unknown_tokens_literal() {
        assert_eq!(get_path("/users/:id", &Params::new()), "users/:id");
    }

    #[test]
    fn get_path_strips_only_one_leading_slash() {
        assert_eq!(get_path("//a", &Params::new()), "/a");
    }

    #[test]
    fn breadcrumb_name_substitutes_params() {
        let route = Route::new("", "User: :name");
        assert_eq!(
            get_breadcrumb_name(&route, &params(&[("name", "Alice")])),
            Some("User: Alice".to_string())
        );
    }

    #[test]
    fn breadcrumb_name_keeps_token_when_key_missing() {
        let route = Route::new("", "User: :name");
        assert_eq!(
            get_breadcrumb_name(&route, &params(&[("id", "1")])),
            Some("User: :name".to_string())
        );
    }

    #[test]
    fn breadcrumb_name_keeps_token_when_value_empty() {
        let route = Route::new("", "User: :name");
        assert_eq!(
            get_breadcrumb_name(&route, &params(&[("name", "")])),
            Some("User: :name".to_string())
        );
    }

    #[test]
    fn breadcrumb_name_empty_is_none() {
        let route = Route::new("x", "");
        assert_eq!(get_breadcrumb_name(&route, &Params::new()), None);
    }

    #[test]
    fn breadcrumb_name_escapes_regex_metacharacters_in_keys() {
        let route = Route::new("", "value :a.b here");
        assert_eq!(
            get_breadcrumb_name(&route, &params(&[("a.b", "X")])),
            Some("value X here".to_string())
        );
        // The dot must not act as a wildcard.
        let route = Route::new("", "value :aXb here");
        assert_eq!(
            get_breadcrumb_name(&route, &params(&[("a.b", "X")])),
            Some("value :aXb here".to_string())
        );
    }

    #[test]
    fn add_child_path_is_pure_and_skips_empty() {
        let paths = vec!["a".to_string()];
        let with_child = add_child_path(&paths, "/b", &Params::new());
        assert_eq!(with_child, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(paths, vec!["a".to_string()]);

        let unchanged = add_child_path(&paths, "", &Params::new());
        assert_eq!(unchanged, paths);
    }
}
