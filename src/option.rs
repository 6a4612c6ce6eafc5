//! The option abstraction and pipelines thereof.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::request::Request;

/// A single request transformation.
///
/// An option receives the request being built and returns the authoritative
/// request, or fails. Implementations may mutate the input and hand it back,
/// or return a replacement; callers must propagate whichever request comes
/// out. On failure the returned error is authoritative and any partial
/// request is discarded.
///
/// Options compose: closures of type `Fn(Request) -> Result<Request>` are
/// options, tuples of options apply left to right, and [`Pipeline`] packages
/// an option sequence as a single reusable value.
pub trait Opt: Send + Sync {
    /// Apply this option to the request.
    fn apply(&self, request: Request) -> Result<Request>;
}

impl<F> Opt for F
where
    F: Fn(Request) -> Result<Request> + Send + Sync,
{
    fn apply(&self, request: Request) -> Result<Request> {
        self(request)
    }
}

/// The no-op option: applying it returns the request unchanged.
impl Opt for () {
    fn apply(&self, request: Request) -> Result<Request> {
        Ok(request)
    }
}

fn indexed(index: usize, source: Error) -> Error {
    Error::Option {
        index,
        source: Box::new(source),
    }
}

macro_rules! impl_opt_for_tuple {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Opt),+> Opt for ($($name,)+) {
            fn apply(&self, request: Request) -> Result<Request> {
                let mut request = request;
                $(
                    request = self.$idx.apply(request).map_err(|e| indexed($idx, e))?;
                )+
                Ok(request)
            }
        }
    };
}

impl_opt_for_tuple!(0 A);
impl_opt_for_tuple!(0 A, 1 B);
impl_opt_for_tuple!(0 A, 1 B, 2 C);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_opt_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);

/// An ordered sequence of options, itself an option.
///
/// Pipelines are cheap to clone and append to, and nest: applying a pipeline
/// splices its members in at that position, which is what lets callers
/// publish reusable preambles (say, auth plus tracing headers) as one value.
///
/// Members run in order. The first failure stops the pipeline and is wrapped
/// with the failing member's zero-based index.
#[derive(Clone, Default)]
pub struct Pipeline {
    opts: Vec<Arc<dyn Opt>>,
}

impl Pipeline {
    /// An empty pipeline, the identity option.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new pipeline with `opt` appended after the existing members.
    pub fn with(mut self, opt: impl Opt + 'static) -> Self {
        self.opts.push(Arc::new(opt));
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    /// Whether the pipeline has no members.
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }
}

impl Opt for Pipeline {
    fn apply(&self, request: Request) -> Result<Request> {
        let mut request = request;
        for (index, opt) in self.opts.iter().enumerate() {
            request = opt.apply(request).map_err(|e| indexed(index, e))?;
        }
        Ok(request)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("len", &self.opts.len()).finish()
    }
}

/// Apply options to an already-seeded request.
///
/// Convenience over [`Opt::apply`]; `opts` is usually a tuple or a
/// [`Pipeline`].
pub fn apply(request: Request, opts: impl Opt) -> Result<Request> {
    opts.apply(request)
}

/// Build a [`Pipeline`] from a list of options.
///
/// ```
/// let preamble = reqpipe::pipeline![
///     reqpipe::bearer_auth("token"),
///     reqpipe::user_agent("cereal-bot/1.0"),
/// ];
/// assert_eq!(preamble.len(), 2);
/// ```
#[macro_export]
macro_rules! pipeline {
    () => { $crate::Pipeline::new() };
    ($($opt:expr),+ $(,)?) => {{
        let pipeline = $crate::Pipeline::new();
        $(
            let pipeline = pipeline.with($opt);
        )+
        pipeline
    }};
}
