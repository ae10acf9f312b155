//! Partial application over a leading argument.
//!
//! [`curry`] wraps a function of one leading argument plus zero or more
//! trailing arguments. The wrapped function can then be called in full, or
//! with its leading argument only, in which case the call is deferred until
//! the remainder arrives.
//!
//! # Design Decisions
//!
//! Trailing arguments travel as a tuple, so one adapter serves every arity
//! from 1 to 6. The implementations for each arity are generated by
//! `macro_rules!`.
//!
//! The wrapped function is shared through `std::rc::Rc`, which allows:
//!
//! - The curried function to be deferred any number of times
//! - Deferred calls to be reused when the leading argument is [`Clone`]
//!
//! Both [`Curried`] and [`Deferred`] are therefore `!Send`; pipelines run on a
//! single thread.

use std::fmt;
use std::rc::Rc;

/// Calls a function with a leading argument and a tuple of trailing arguments.
///
/// Implemented for every `Fn(Lead, B, C, ...)` with up to five trailing
/// arguments. `Rest = ()` calls a unary `Fn(Lead)`.
pub trait Invoke<Lead, Rest> {
    /// The function's return type.
    type Output;

    /// Calls the function as `self(lead, rest.0, rest.1, ...)`.
    fn invoke(&self, lead: Lead, rest: Rest) -> Self::Output;
}

/// Calls a function with all of its arguments packed in a tuple.
///
/// Implemented for every `Fn(A, B, ...)` of arity 0 to 6. Used by
/// [`Compound`](crate::compose::Compound) for its multi-argument first stage.
pub trait Apply<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function as `self(args.0, args.1, ...)`.
    fn apply(&self, args: Args) -> Self::Output;
}

/// Trailing arguments accepted by [`Curried::call`].
///
/// An empty tuple defers the call and yields a [`Deferred`]; a non-empty one
/// invokes the function immediately.
pub trait Remainder<F, Lead> {
    /// What the call produces.
    type Output;

    /// Completes or defers the call.
    fn complete(self, function: &Rc<F>, lead: Lead) -> Self::Output;
}

impl<F, Lead> Remainder<F, Lead> for () {
    type Output = Deferred<F, Lead>;

    #[inline]
    fn complete(self, function: &Rc<F>, lead: Lead) -> Deferred<F, Lead> {
        Deferred {
            function: Rc::clone(function),
            lead,
        }
    }
}

macro_rules! impl_arity {
    ($(($($name:ident: $type:ident),*)),+ $(,)?) => {$(
        impl<Function, Lead, $($type,)* R> Invoke<Lead, ($($type,)*)> for Function
        where
            Function: Fn(Lead, $($type),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke(&self, lead: Lead, ($($name,)*): ($($type,)*)) -> R {
                self(lead, $($name),*)
            }
        }

        impl<Function, Lead, $($type,)* R> Apply<(Lead, $($type,)*)> for Function
        where
            Function: Fn(Lead, $($type),*) -> R,
        {
            type Output = R;

            #[inline]
            fn apply(&self, (lead, $($name,)*): (Lead, $($type,)*)) -> R {
                self(lead, $($name),*)
            }
        }
    )+};
}

macro_rules! impl_remainder {
    ($(($($name:ident: $type:ident),+)),+ $(,)?) => {$(
        impl<F, Lead, $($type),+> Remainder<F, Lead> for ($($type,)+)
        where
            F: Invoke<Lead, ($($type,)+)>,
        {
            type Output = F::Output;

            #[inline]
            fn complete(self, function: &Rc<F>, lead: Lead) -> Self::Output {
                F::invoke(function, lead, self)
            }
        }
    )+};
}

impl_arity!(
    (),
    (second: B),
    (second: B, third: C),
    (second: B, third: C, fourth: D),
    (second: B, third: C, fourth: D, fifth: E),
    (second: B, third: C, fourth: D, fifth: E, sixth: G),
);

impl_remainder!(
    (second: B),
    (second: B, third: C),
    (second: B, third: C, fourth: D),
    (second: B, third: C, fourth: D, fifth: E),
    (second: B, third: C, fourth: D, fifth: E, sixth: G),
);

impl<Function, R> Apply<()> for Function
where
    Function: Fn() -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, (): ()) -> R {
        self()
    }
}

/// A function that accepts its leading argument separately from the rest.
///
/// Created by [`curry`].
pub struct Curried<F> {
    function: Rc<F>,
}

/// Wraps a function so it can be called in full or with its leading argument
/// only.
///
/// - `curry(f).call(lead, (b, c))` calls `f(lead, b, c)` immediately
/// - `curry(f).call(lead, ())` (or `.defer(lead)`) returns a [`Deferred`] that
///   calls `f(lead, ...)` once the remaining arguments arrive
///
/// Arity is never checked by the adapter itself: a call with the wrong number
/// or types of arguments is rejected by `f`'s own signature.
///
/// # Examples
///
/// ```rust
/// use seqline::compose::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry(volume);
/// assert_eq!(curried.call(2, (3, 4)), 24);
///
/// let width_two = curried.defer(2);
/// assert_eq!(width_two.call((3, 4)), 24);
/// assert_eq!(width_two.call((5, 5)), 50);
/// ```
#[inline]
pub fn curry<F>(function: F) -> Curried<F> {
    Curried {
        function: Rc::new(function),
    }
}

impl<F> Curried<F> {
    /// Calls with a leading argument and a tuple of trailing arguments.
    ///
    /// An empty tuple defers the call, exactly like [`defer`](Self::defer).
    #[inline]
    pub fn call<Lead, Rest>(&self, lead: Lead, rest: Rest) -> Rest::Output
    where
        Rest: Remainder<F, Lead>,
    {
        rest.complete(&self.function, lead)
    }

    /// Captures the leading argument and waits for the rest.
    ///
    /// Never invokes the function.
    #[inline]
    pub fn defer<Lead>(&self, lead: Lead) -> Deferred<F, Lead> {
        Deferred {
            function: Rc::clone(&self.function),
            lead,
        }
    }
}

impl<F> Clone for Curried<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<F> fmt::Debug for Curried<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Curried").finish_non_exhaustive()
    }
}

/// A function with its leading argument bound, awaiting the remainder.
///
/// The remainder may be any number of arguments the function accepts,
/// including none.
pub struct Deferred<F, Lead> {
    function: Rc<F>,
    lead: Lead,
}

impl<F, Lead> Deferred<F, Lead> {
    /// Returns the bound leading argument.
    #[inline]
    pub const fn lead(&self) -> &Lead {
        &self.lead
    }

    /// Completes the call, keeping this deferral reusable.
    #[inline]
    pub fn call<Rest>(&self, rest: Rest) -> F::Output
    where
        F: Invoke<Lead, Rest>,
        Lead: Clone,
    {
        F::invoke(&self.function, self.lead.clone(), rest)
    }

    /// Completes the call, consuming the bound argument.
    #[inline]
    pub fn call_once<Rest>(self, rest: Rest) -> F::Output
    where
        F: Invoke<Lead, Rest>,
    {
        F::invoke(&self.function, self.lead, rest)
    }

    /// Turns this deferral into a unary pipeline stage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqline::compose::curry;
    /// use seqline::list_processing;
    ///
    /// let add = |left: i32, right: i32| left + right;
    /// let add_ten = curry(add).defer(10).into_stage();
    /// assert_eq!(list_processing!(5, add_ten), 15);
    /// ```
    #[inline]
    pub fn into_stage<In>(self) -> impl FnOnce(In) -> <F as Invoke<Lead, (In,)>>::Output
    where
        F: Invoke<Lead, (In,)>,
    {
        move |input| self.call_once((input,))
    }
}

impl<F, Lead: Clone> Clone for Deferred<F, Lead> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            lead: self.lead.clone(),
        }
    }
}

impl<F, Lead: fmt::Debug> fmt::Debug for Deferred<F, Lead> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Deferred")
            .field("lead", &self.lead)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Curried<fn(i32, i32) -> i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Deferred<fn(i32, i32) -> i32, i32>: Send, Sync);
