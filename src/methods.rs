//! Static public-method probing.
//!
//! Types declare the names of their public methods through [`PublicMethods`],
//! usually via the [`public_methods!`](crate::public_methods) macro, and callers
//! probe them by name with [`has_public_method`].

/// Names of the public methods a type exposes for probing.
pub trait PublicMethods {
    const PUBLIC_METHODS: &'static [&'static str];
}

/// Checks whether the type of `object` declares a public method called `method`.
///
/// ```
/// use dragon_helpers::{has_public_method, public_methods};
///
/// struct Mailer;
///
/// impl Mailer {
///     pub fn send(&self) {}
/// }
///
/// public_methods!(Mailer => [send]);
///
/// assert!(has_public_method(&Mailer, "send"));
/// assert!(!has_public_method(&Mailer, "queue"));
/// ```
pub fn has_public_method<T: PublicMethods + ?Sized>(_object: &T, method: &str) -> bool {
    T::PUBLIC_METHODS.contains(&method)
}

/// Implements [`PublicMethods`] for a type from a list of method names.
#[macro_export]
macro_rules! public_methods {
    ($ty:ty => [$($method:ident),* $(,)?]) => {
        impl $crate::PublicMethods for $ty {
            const PUBLIC_METHODS: &'static [&'static str] = &[$(stringify!($method)),*];
        }
    };
}
