//! Deferred sources: queries that run only when a terminal operation is invoked.

use std::convert::Infallible;
use std::error::Error as StdError;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::offset::OffsetPagination;

/// One page as produced by a deferred source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage<T> {
    /// The items in this page, in source order.
    pub items: Vec<T>,
    /// Total count of items matching the query (across all pages).
    pub total: u64,
}

impl<T> SourcePage<T> {
    /// Creates a new source page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Creates an empty source page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// A lazily evaluated, ordered query over a backing store.
///
/// Nothing is read until `count`, `ordered_slice`, `fetch_all` or `paginate`
/// is awaited. Implementations translate these into whatever the store
/// understands, typically `COUNT(*)` and `LIMIT`/`OFFSET` queries. Timeouts
/// and cancellation are the implementation's concern.
#[async_trait]
pub trait DeferredSource: Send + Sync {
    /// The item type this source yields.
    type Item: Send;
    /// The error reported by the backing store.
    type Error: StdError + Send + Sync + 'static;

    /// Returns the number of items the query matches.
    async fn count(&self) -> Result<u64, Self::Error>;

    /// Returns at most `limit` items starting at `offset`, in query order.
    async fn ordered_slice(&self, offset: u64, limit: u64)
    -> Result<Vec<Self::Item>, Self::Error>;

    /// Returns every item the query matches, in query order.
    async fn fetch_all(&self) -> Result<Vec<Self::Item>, Self::Error>;

    /// Returns the total count and the items of page `page` of size `per_page`.
    ///
    /// The default implementation counts first and skips the slice query when
    /// nothing matches. Override it when the store can answer both in a
    /// single round trip.
    async fn paginate(
        &self,
        per_page: u32,
        page: u64,
    ) -> Result<SourcePage<Self::Item>, Self::Error> {
        let total = self.count().await?;
        if total == 0 {
            return Ok(SourcePage::empty());
        }

        let window = OffsetPagination::from_page(page, per_page);
        let items = self.ordered_slice(window.offset, window.limit).await?;
        Ok(SourcePage::new(items, total))
    }
}

#[async_trait]
impl<S: DeferredSource + ?Sized> DeferredSource for &S {
    type Error = S::Error;
    type Item = S::Item;

    async fn count(&self) -> Result<u64, Self::Error> {
        (**self).count().await
    }

    async fn ordered_slice(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        (**self).ordered_slice(offset, limit).await
    }

    async fn fetch_all(&self) -> Result<Vec<Self::Item>, Self::Error> {
        (**self).fetch_all().await
    }

    async fn paginate(
        &self,
        per_page: u32,
        page: u64,
    ) -> Result<SourcePage<Self::Item>, Self::Error> {
        (**self).paginate(per_page, page).await
    }
}

#[async_trait]
impl<S: DeferredSource + ?Sized> DeferredSource for Arc<S> {
    type Error = S::Error;
    type Item = S::Item;

    async fn count(&self) -> Result<u64, Self::Error> {
        (**self).count().await
    }

    async fn ordered_slice(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        (**self).ordered_slice(offset, limit).await
    }

    async fn fetch_all(&self) -> Result<Vec<Self::Item>, Self::Error> {
        (**self).fetch_all().await
    }

    async fn paginate(
        &self,
        per_page: u32,
        page: u64,
    ) -> Result<SourcePage<Self::Item>, Self::Error> {
        (**self).paginate(per_page, page).await
    }
}

/// A deferred source that never has anything to read.
///
/// Used as the source type of a [`Queryable`] that only ever holds a
/// materialized sequence.
///
/// [`Queryable`]: crate::Queryable
#[derive(Debug)]
pub struct NoSource<T>(PhantomData<fn() -> T>);

impl<T> NoSource<T> {
    /// Returns a new [`NoSource`].
    #[inline]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for NoSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NoSource<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send> DeferredSource for NoSource<T> {
    type Error = Infallible;
    type Item = T;

    async fn count(&self) -> Result<u64, Self::Error> {
        Ok(0)
    }

    async fn ordered_slice(&self, _: u64, _: u64) -> Result<Vec<Self::Item>, Self::Error> {
        Ok(Vec::new())
    }

    async fn fetch_all(&self) -> Result<Vec<Self::Item>, Self::Error> {
        Ok(Vec::new())
    }
}
