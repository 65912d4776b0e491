// ============================================================================
// Menu Infrastructure - Named Route Table
// File: crates/menu-infrastructure/src/routing/route_table.rs
// Description: Reverse named routes to paths and resolve paths to routes
// ============================================================================
//! Patterns look like `/articles/{id:int}/`. Placeholders take an optional
//! converter: `str` (default, no `/`), `int`, `slug` or `path`.

use std::collections::BTreeSet;

use regex::Regex;
use serde_json::{json, Value};
use tracing::debug;

use menu_core::domain::{RouteArgs, RouteKwargs, RouteMatch};
use menu_core::error::RouteError;
use menu_core::services::UrlResolver;
use menu_shared::config::RouteSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Converter {
    Str,
    Int,
    Slug,
    Path,
}

impl Converter {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "" | "str" => Some(Converter::Str),
            "int" => Some(Converter::Int),
            "slug" => Some(Converter::Slug),
            "path" => Some(Converter::Path),
            _ => None,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Converter::Str => "[^/]+",
            Converter::Int => "[0-9]+",
            Converter::Slug => "[-a-zA-Z0-9_]+",
            Converter::Path => ".+",
        }
    }

    fn accepts(self, raw: &str) -> bool {
        !raw.is_empty()
            && match self {
                Converter::Str => !raw.contains('/'),
                Converter::Int => raw.bytes().all(|b| b.is_ascii_digit()),
                Converter::Slug => raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                Converter::Path => true,
            }
    }

    /// Captured text as a route argument; `int` captures become numbers.
    fn to_value(self, raw: &str) -> Value {
        match self {
            Converter::Int => raw
                .parse::<u64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            _ => Value::String(raw.to_string()),
        }
    }

    /// Argument as percent-encoded path text, if this converter accepts it.
    /// `path` arguments keep their `/` separators.
    fn to_path(self, value: &Value) -> Option<String> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if !self.accepts(&raw) {
            return None;
        }
        Some(
            raw.split('/')
                .map(|segment| urlencoding::encode(segment).into_owned())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param { name: String, converter: Converter },
}

#[derive(Debug, Clone)]
struct RoutePattern {
    name: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl RoutePattern {
    fn parse(name: &str, pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut seen = BTreeSet::new();
        let mut rest = pattern;
        while let Some(open) = rest.find('{') {
            if rest[..open].contains('}') {
                return Err(invalid("unmatched '}'"));
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let close = rest[open..].find('}').ok_or_else(|| invalid("unclosed '{'"))? + open;
            let placeholder = &rest[open + 1..close];
            let (param, converter) = placeholder.split_once(':').unwrap_or((placeholder, ""));

            let valid_name = param.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid_name {
                return Err(invalid("placeholder name must be an identifier"));
            }
            let converter = Converter::parse(converter).ok_or_else(|| invalid("unknown converter"))?;
            if !seen.insert(param.to_string()) {
                return Err(invalid("duplicate placeholder"));
            }

            segments.push(Segment::Param {
                name: param.to_string(),
                converter,
            });
            rest = &rest[close + 1..];
        }
        if rest.contains('}') {
            return Err(invalid("unmatched '}'"));
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        let mut source = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Param { name, converter } => {
                    source.push_str(&format!("(?P<{}>{})", name, converter.pattern()));
                }
            }
        }
        source.push('$');
        let regex = Regex::new(&source).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            segments,
            regex,
        })
    }

    fn params(&self) -> impl Iterator<Item = (&str, Converter)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param { name, converter } => Some((name.as_str(), *converter)),
            Segment::Literal(_) => None,
        })
    }

    fn reverse_with(&self, args: &[Value], kwargs: &RouteKwargs) -> Option<String> {
        let param_count = self.params().count();
        if !args.is_empty() && args.len() != param_count {
            return None;
        }
        if args.is_empty() {
            let names: BTreeSet<&str> = self.params().map(|(name, _)| name).collect();
            if kwargs.len() != names.len() || !kwargs.keys().all(|k| names.contains(k.as_str())) {
                return None;
            }
        }

        let mut path = String::new();
        let mut positional = args.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param { name, converter } => {
                    let value = if args.is_empty() {
                        kwargs.get(name)?
                    } else {
                        positional.next()?
                    };
                    path.push_str(&converter.to_path(value)?);
                }
            }
        }
        Some(path)
    }

    fn match_path(&self, path: &str) -> Option<RouteKwargs> {
        let captures = self.regex.captures(path)?;
        Some(
            self.params()
                .filter_map(|(name, converter)| {
                    captures
                        .name(name)
                        .map(|m| (name.to_string(), converter.to_value(m.as_str())))
                })
                .collect(),
        )
    }
}

/// Ordered named routes of the application. Several patterns may share a
/// name; reversing tries them in order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RoutePattern>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &[RouteSettings]) -> Result<Self, RouteError> {
        settings
            .iter()
            .try_fold(Self::new(), |table, route| table.route(&route.name, &route.pattern))
    }

    pub fn route(mut self, name: &str, pattern: &str) -> Result<Self, RouteError> {
        self.routes.push(RoutePattern::parse(name, pattern)?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl UrlResolver for RouteTable {
    fn reverse(&self, route_name: &str, args: &[Value], kwargs: &RouteKwargs) -> Result<String, RouteError> {
        let mut candidates = self.routes.iter().filter(|r| r.name == route_name).peekable();
        if candidates.peek().is_none() {
            return Err(RouteError::UnknownRoute(route_name.to_string()));
        }
        if !args.is_empty() && !kwargs.is_empty() {
            return Err(RouteError::MixedArguments(route_name.to_string()));
        }

        candidates
            .find_map(|route| route.reverse_with(args, kwargs))
            .ok_or_else(|| RouteError::NoReverseMatch {
                name: route_name.to_string(),
                arguments: json!({ "args": args, "kwargs": kwargs }).to_string(),
            })
    }

    fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let (route, kwargs) = self
            .routes
            .iter()
            .find_map(|route| route.match_path(path).map(|kwargs| (route, kwargs)))?;

        debug!("Resolved {} to route {}", path, route.name);
        Some(
            RouteMatch::new(route.name.clone())
                .with_args(RouteArgs::new())
                .with_kwargs(kwargs),
        )
    }
}
