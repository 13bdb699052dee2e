//! Typed errors shared across the workspace.

/// Failure of the persistent preference store.
///
/// Callers on the degradation path (the controller) swallow these: a failed
/// read resolves to the default preference and a failed write is dropped.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store cannot be reached at all (e.g. disabled in the browser).
    #[error("preference store is unavailable")]
    Unavailable,
    /// The store rejected the operation.
    #[error("preference store rejected the operation: {0}")]
    Backend(String),
}

/// A stored preference value outside `"light"` / `"dark"`.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized preference value: {0:?}")]
pub struct UnknownPreference(pub String);

/// A theme name the engine vocabulary does not contain.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized theme name: {0:?}")]
pub struct UnknownTheme(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_unavailable_store() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "preference store is unavailable"
        );
    }

    #[test]
    fn should_include_backend_reason() {
        let err = StorageError::Backend("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn should_quote_offending_value() {
        let err = UnknownPreference("sepia".to_string());
        assert!(err.to_string().contains("\"sepia\""));
    }
}
