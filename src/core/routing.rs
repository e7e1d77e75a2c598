use std::sync::Arc;
use tracing::{debug, trace};

/// Parsed field annotation of the form `name[,option...]`.
/// Options are accepted and carried but do not change routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: &'a str,
    options: Vec<&'a str>,
}

impl<'a> FieldTag<'a> {
    /// Returns `None` for malformed tags; such fields are not indexed.
    pub fn parse(tag: &'a str) -> Option<Self> {
        let mut parts = tag.trim().split(',');
        let name = parts.next()?.trim();

        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '`') {
            return None;
        }

        let options = parts
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .collect();

        Some(FieldTag { name, options })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn options(&self) -> &[&'a str] {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Default,
    Named(String),
}

/// One piece of text bound for one index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub destination: Destination,
    pub text: String,
}

/// Collects the routes a payload declares
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Router { routes: Vec::new() }
    }

    /// Plain text, indexed into the store's default index
    pub fn text(&mut self, value: &str) {
        self.routes.push(Route {
            destination: Destination::Default,
            text: value.to_string(),
        });
    }

    /// Annotated string field
    pub fn field(&mut self, tag: &str, value: &str) {
        let Some(tag) = FieldTag::parse(tag) else {
            debug!(tag, "skipping field with malformed index tag");
            return;
        };
        if !tag.options().is_empty() {
            trace!(index = tag.name(), options = ?tag.options(), "ignoring index tag options");
        }
        self.routes.push(Route {
            destination: Destination::Named(tag.name().to_string()),
            text: value.to_string(),
        });
    }

    /// Annotated sequence of strings, routed element-wise
    pub fn fields<I, S>(&mut self, tag: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(tag) = FieldTag::parse(tag) else {
            debug!(tag, "skipping field with malformed index tag");
            return;
        };
        if !tag.options().is_empty() {
            trace!(index = tag.name(), options = ?tag.options(), "ignoring index tag options");
        }
        for value in values {
            self.routes.push(Route {
                destination: Destination::Named(tag.name().to_string()),
                text: value.as_ref().to_string(),
            });
        }
    }

    /// Nested record; walked whether or not the field itself is annotated
    pub fn nested<R: Indexable + ?Sized>(&mut self, record: &R) {
        record.route(self);
    }

    pub fn nested_all<'r, I, R>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'r R>,
        R: Indexable + 'r,
    {
        for record in records {
            record.route(self);
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

/// A payload that declares which of its text goes into which index
pub trait Indexable {
    fn route(&self, router: &mut Router);
}

impl Indexable for str {
    fn route(&self, router: &mut Router) {
        router.text(self);
    }
}

impl Indexable for String {
    fn route(&self, router: &mut Router) {
        router.text(self);
    }
}

impl<T: Indexable + ?Sized> Indexable for &T {
    fn route(&self, router: &mut Router) {
        (**self).route(router);
    }
}

impl<T: Indexable + ?Sized> Indexable for Box<T> {
    fn route(&self, router: &mut Router) {
        (**self).route(router);
    }
}

impl<T: Indexable + ?Sized> Indexable for Arc<T> {
    fn route(&self, router: &mut Router) {
        (**self).route(router);
    }
}

/// Declares the index routing of a record type, one entry per indexed field.
///
/// ```
/// struct Author { name: String }
/// struct Post { title: String, tags: Vec<String>, author: Author, views: u64 }
///
/// spyglass::indexable!(Author { name: text("authors") });
/// spyglass::indexable!(Post {
///     title: text("titles"),
///     tags: texts("tags"),
///     author: record,
/// });
/// ```
///
/// `text` and `texts` take the destination index tag; `record` and `records`
/// walk nested values that implement `Indexable`. Unlisted fields are not indexed.
#[macro_export]
macro_rules! indexable {
    (@field $router:ident, $value:expr, text, $tag:expr) => {
        $router.field($tag, &$value)
    };
    (@field $router:ident, $value:expr, texts, $tag:expr) => {
        $router.fields($tag, &$value)
    };
    (@field $router:ident, $value:expr, record) => {
        $router.nested(&$value)
    };
    (@field $router:ident, $value:expr, records) => {
        $router.nested_all(&$value)
    };
    ($ty:ty { $($field:ident : $kind:ident $(($tag:expr))?),* $(,)? }) => {
        impl $crate::core::routing::Indexable for $ty {
            fn route(&self, router: &mut $crate::core::routing::Router) {
                $( $crate::indexable!(@field router, self.$field, $kind $(, $tag)?); )*
            }
        }
    };
}
