//! Values that are either available now or resolve later.
//!
//! Route handlers and router-aware viewport setup may finish synchronously or
//! asynchronously. [`Potential`] lets both cases flow through the same call
//! sites: it is a [`Future`], and [`Potential::then`] keeps synchronous chains
//! synchronous.

use futures::future::{self, BoxFuture, FutureExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A value that is either ready or pending.
#[must_use = "a pending computation does nothing unless awaited"]
pub enum Potential<T> {
	/// The value is available immediately.
	Ready(future::Ready<T>),
	/// The value resolves when the future completes.
	Pending(BoxFuture<'static, T>),
}

impl<T> Potential<T> {
	/// Wraps an immediately available value.
	pub fn ready(value: T) -> Self {
		Self::Ready(future::ready(value))
	}

	/// Wraps a future.
	pub fn pending<F>(fut: F) -> Self
	where
		F: Future<Output = T> + Send + 'static,
	{
		Self::Pending(fut.boxed())
	}

	/// Returns whether the value is available without awaiting.
	pub fn is_ready(&self) -> bool {
		matches!(self, Self::Ready(_))
	}

	/// Takes the value if it is available now, otherwise returns `self`.
	pub fn into_ready(self) -> Result<T, Self> {
		match self {
			Self::Ready(ready) => Ok(ready.into_inner()),
			pending => Err(pending),
		}
	}
}

impl<T: Send + 'static> Potential<T> {
	/// Transforms the value once available.
	pub fn map<U, F>(self, f: F) -> Potential<U>
	where
		U: Send + 'static,
		F: FnOnce(T) -> U + Send + 'static,
	{
		match self {
			Self::Ready(ready) => Potential::ready(f(ready.into_inner())),
			Self::Pending(fut) => Potential::Pending(fut.map(f).boxed()),
		}
	}

	/// Chains another potential computation.
	///
	/// When `self` is ready, `f` runs immediately and its result is returned
	/// as is, so a chain of ready steps never suspends.
	pub fn then<U, F>(self, f: F) -> Potential<U>
	where
		U: Send + 'static,
		F: FnOnce(T) -> Potential<U> + Send + 'static,
	{
		match self {
			Self::Ready(ready) => f(ready.into_inner()),
			Self::Pending(fut) => Potential::Pending(fut.then(f).boxed()),
		}
	}
}

impl<T, E> Potential<Result<T, E>>
where
	T: Send + 'static,
	E: Send + 'static,
{
	/// Chains a fallible step, short-circuiting on error.
	pub fn and_then<U, F>(self, f: F) -> Potential<Result<U, E>>
	where
		U: Send + 'static,
		F: FnOnce(T) -> Potential<Result<U, E>> + Send + 'static,
	{
		self.then(|result| match result {
			Ok(value) => f(value),
			Err(err) => Potential::ready(Err(err)),
		})
	}
}

impl<T> Future for Potential<T> {
	type Output = T;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
		match self.get_mut() {
			Self::Ready(ready) => ready.poll_unpin(cx),
			Self::Pending(fut) => fut.as_mut().poll(cx),
		}
	}
}

impl<T> std::fmt::Debug for Potential<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Ready(_) => f.write_str("Potential::Ready"),
			Self::Pending(_) => f.write_str("Potential::Pending"),
		}
	}
}
