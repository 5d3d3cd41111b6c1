/// Errors reported by the ambient request-context registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// A default request context is already installed for this process
    AlreadyInstalled,
}

impl core::fmt::Display for ContextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::AlreadyInstalled => "default request context already installed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ContextError {}
