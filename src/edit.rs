use crate::query::Query;
use crate::url::Url;

/// A structured edit: every component set here overwrites its counterpart
/// when applied through [`Url::modify`].
///
/// `clear_*` methods remove a component outright; components without a
/// `clear_*` form cannot be absent on a constructed URL.
#[derive(Debug, Clone, Default)]
pub struct Edit {
    pub(crate) scheme: Option<Option<String>>,
    pub(crate) user: Option<Option<String>>,
    pub(crate) pass: Option<Option<String>>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<Option<u16>>,
    pub(crate) path: Option<String>,
    pub(crate) query: Option<Query>,
    pub(crate) fragment: Option<Option<String>>,
}

impl Edit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scheme. Unless a port is supplied in the same edit, the
    /// current port is dropped and re-derived against the new scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(Some(scheme.into()));
        self
    }

    pub fn clear_scheme(mut self) -> Self {
        self.scheme = Some(None);
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(Some(user.into()));
        self
    }

    pub fn clear_user(mut self) -> Self {
        self.user = Some(None);
        self
    }

    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(Some(pass.into()));
        self
    }

    pub fn clear_pass(mut self) -> Self {
        self.pass = Some(None);
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(Some(port));
        self
    }

    pub fn clear_port(mut self) -> Self {
        self.port = Some(None);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replace the whole query mapping; accepts a [`Query`] or a raw string.
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(Some(fragment.into()));
        self
    }

    pub fn clear_fragment(mut self) -> Self {
        self.fragment = Some(None);
        self
    }
}

/// Anything [`Url::modify`] accepts: a shorthand location string, a
/// structured [`Edit`], or a whole replacement URL.
#[derive(Debug, Clone)]
pub enum Location {
    Text(String),
    Edit(Edit),
    Url(Url),
}

impl From<&str> for Location {
    fn from(location: &str) -> Self {
        Self::Text(location.to_string())
    }
}

impl From<String> for Location {
    fn from(location: String) -> Self {
        Self::Text(location)
    }
}

impl From<Edit> for Location {
    fn from(edit: Edit) -> Self {
        Self::Edit(edit)
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&Url> for Location {
    fn from(url: &Url) -> Self {
        Self::Url(url.clone())
    }
}
