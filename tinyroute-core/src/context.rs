//! Opaque dispatch context.
//!
//! A [`Context`] travels from the caller of a dispatch entry point to the
//! registered factory without the router looking inside. The factory
//! recovers the concrete value with [`Context::downcast_ref`].

use std::{any::Any, fmt};

/// An opaque value handed through dispatch unchanged.
///
/// # Example
///
/// ```rust
/// use tinyroute_core::Context;
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let ctx = Context::new(User { name: "name".into(), age: 12 });
/// assert_eq!(ctx.downcast_ref::<User>().map(|u| u.age), Some(12));
/// assert!(ctx.downcast_ref::<String>().is_none());
/// ```
pub struct Context {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Context {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T`, if that is what it holds.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Whether the value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Take the value back as `T`.
    ///
    /// On a type mismatch the context is returned unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }

    /// Name of the wrapped type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Context;

    #[test]
    fn downcast_recovers_value() {
        let ctx = Context::new(42_u32);
        assert!(ctx.is::<u32>());
        assert_eq!(ctx.downcast::<u32>().ok(), Some(42));
    }

    #[test]
    fn downcast_mismatch_returns_context() {
        let ctx = Context::new("hello");
        let ctx = ctx.downcast::<u32>().unwrap_err();
        assert_eq!(ctx.downcast_ref::<&str>(), Some(&"hello"));
        assert!(ctx.type_name().contains("str"));
    }
}
