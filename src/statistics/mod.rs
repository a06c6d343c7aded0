use std::convert::Infallible;

/// A function of data producing an estimate.
///
/// Every `Fn(&D) -> T` is a statistic, so plain closures can be handed to the
/// estimator directly.
pub trait Statistic<D: ?Sized, T> {
    /// Evaluate the statistic on `data`.
    fn compute(&self, data: &D) -> T;
}

impl<D, T, F> Statistic<D, T> for F
where
    D: ?Sized,
    F: Fn(&D) -> T,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        self(data)
    }
}

/// A statistic that may fail.
///
/// Closures and the built-in statistics are `TryStatistic`s that never fail.
/// Wrap a `Fn(&D) -> Result<T, E>` in [`Fallible`] to get one that can.
pub trait TryStatistic<D: ?Sized, T> {
    /// Failure reported by the statistic.
    type Error;

    /// Evaluate the statistic on `data`.
    fn try_compute(&self, data: &D) -> Result<T, Self::Error>;
}

impl<D, T, F> TryStatistic<D, T> for F
where
    D: ?Sized,
    F: Fn(&D) -> T,
{
    type Error = Infallible;

    #[inline]
    fn try_compute(&self, data: &D) -> Result<T, Infallible> {
        Ok(self(data))
    }
}

/// Implements [`TryStatistic`] with `Error = Infallible` for statistics that
/// cannot fail.
macro_rules! infallible {
    ($($ty:ty),* $(,)?) => {$(
        impl<D, T> TryStatistic<D, T> for $ty
        where
            D: ?Sized,
            $ty: Statistic<D, T>,
        {
            type Error = Infallible;

            #[inline]
            fn try_compute(&self, data: &D) -> Result<T, Infallible> {
                Ok(self.compute(data))
            }
        }
    )*};
}

/// Adapter turning a fallible closure into a [`TryStatistic`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<D, T, E, F> TryStatistic<D, T> for Fallible<F>
where
    D: ?Sized,
    F: Fn(&D) -> Result<T, E>,
{
    type Error = E;

    #[inline]
    fn try_compute(&self, data: &D) -> Result<T, E> {
        (self.0)(data)
    }
}

/// A statistic with auxiliary arguments bound to it.
///
/// The arguments are passed by reference, unchanged, on every evaluation.
#[derive(Debug, Clone, Copy)]
pub struct WithArgs<F, A> {
    f: F,
    args: A,
}

impl<F, A> WithArgs<F, A> {
    /// Bind `args` to the two-argument statistic `f`.
    pub fn new(f: F, args: A) -> Self {
        Self { f, args }
    }

    /// The bound arguments.
    pub fn args(&self) -> &A {
        &self.args
    }
}

impl<D, T, F, A> Statistic<D, T> for WithArgs<F, A>
where
    D: ?Sized,
    F: Fn(&D, &A) -> T,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        (self.f)(data, &self.args)
    }
}

impl<D, T, F, A> TryStatistic<D, T> for WithArgs<F, A>
where
    D: ?Sized,
    F: Fn(&D, &A) -> T,
{
    type Error = Infallible;

    #[inline]
    fn try_compute(&self, data: &D) -> Result<T, Infallible> {
        Ok(self.compute(data))
    }
}

mod mean;
mod variance;
mod se;

pub use mean::Mean;
pub use variance::Variance;
pub use se::jackknife_spread;

infallible!(Mean, Variance);
