//! The two kinds of input the paginator accepts.

use crate::source::{DeferredSource, NoSource};

/// Something that can be paginated: a deferred query or items already in memory.
#[derive(Debug, Clone)]
pub enum Queryable<S: DeferredSource> {
    /// A query that is executed only when counted, sliced or fetched.
    Deferred(S),
    /// An ordered sequence already loaded into memory.
    Materialized(Vec<S::Item>),
}

impl<S: DeferredSource> Queryable<S> {
    /// Wraps a deferred source.
    #[inline]
    pub fn deferred(source: S) -> Self {
        Self::Deferred(source)
    }

    /// Returns `true` if this is a deferred source.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Returns a short name of the variant, for logging.
    pub(crate) fn variant(&self) -> &'static str {
        match self {
            Self::Deferred(_) => "deferred",
            Self::Materialized(_) => "materialized",
        }
    }
}

impl<T: Send> Queryable<NoSource<T>> {
    /// Wraps an ordered sequence already loaded into memory.
    #[inline]
    pub fn materialized(items: impl IntoIterator<Item = T>) -> Self {
        Self::Materialized(items.into_iter().collect())
    }
}

impl<T: Send> From<Vec<T>> for Queryable<NoSource<T>> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Materialized(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::VecSource;

    #[test]
    fn materialized_from_vec() {
        let queryable: Queryable<NoSource<&str>> = vec!["a", "b"].into();
        assert!(!queryable.is_deferred());
        assert_eq!(queryable.variant(), "materialized");
    }

    #[test]
    fn deferred_variant() {
        let queryable = Queryable::deferred(VecSource::with_rows(3));
        assert!(queryable.is_deferred());
        assert_eq!(queryable.variant(), "deferred");
    }
}
