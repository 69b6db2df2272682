//! # Framework Errors
//!
//! Errors raised by the store engine itself, plus the envelope that carries an
//! entity's own error back to the caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No ids left to issue")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the error is not an entity error of type `E`,
    /// so callers can fall back to their own mapping.
    ///
    /// ```rust
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, PartialEq, thiserror::Error)]
    /// #[error("out of stock")]
    /// struct OutOfStock;
    ///
    /// let err = FrameworkError::EntityError(Box::new(OutOfStock));
    /// assert_eq!(err.downcast_entity::<OutOfStock>().ok(), Some(OutOfStock));
    ///
    /// let closed = FrameworkError::ActorClosed;
    /// assert!(closed.downcast_entity::<OutOfStock>().is_err());
    /// ```
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
