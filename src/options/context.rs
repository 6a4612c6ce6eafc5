//! Options over the request context.

use std::any::Any;

use crate::context::Context;
use crate::error::Result;
use crate::option::Opt;
use crate::request::Request;

/// Replace the request context.
pub fn context(context: Context) -> impl Opt {
    move |mut request: Request| -> Result<Request> {
        request.context = context.clone();
        Ok(request)
    }
}

/// Derive a child of the current request context with one key binding.
pub fn context_value<V>(key: impl Into<String>, value: V) -> impl Opt
where
    V: Any + Clone + Send + Sync,
{
    let key = key.into();
    move |mut request: Request| -> Result<Request> {
        request.context = request.context.with_value(key.clone(), value.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::option::apply;

    fn seed() -> Request {
        Request::new(
            http::Method::GET,
            url::Url::parse("https://example.com").unwrap(),
        )
    }

    #[test]
    fn context_replaces_and_later_writer_wins() {
        let deadline = Instant::now() + Duration::from_secs(1);
        let first = Context::new().with_deadline(deadline);
        let second = Context::new().with_value("key", "here");
        let request = apply(seed(), (context(first), context(second))).unwrap();
        assert!(request.context.deadline().is_none());
        assert_eq!(request.context.value::<&str>("key"), Some(&"here"));
    }

    #[test]
    fn context_value_derives_from_current_context() {
        let request = apply(
            seed(),
            (
                context(Context::new().with_value("a", 1u32)),
                context_value("b", 2u32),
            ),
        )
        .unwrap();
        assert_eq!(request.context.value::<u32>("a"), Some(&1));
        assert_eq!(request.context.value::<u32>("b"), Some(&2));
    }
}
