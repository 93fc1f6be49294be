//! Sinks stacked onto the tracing registry. Each builder returns a boxed layer
//! so a disabled sink can be swapped for [`noop_layer`] without changing the
//! subscriber type.
use tracing::Subscriber;
use tracing_subscriber::layer::Layer;

pub mod console;
pub mod file;

pub type BoxLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Stand-in for a disabled sink.
pub struct NoopLayer;

impl<S: Subscriber> Layer<S> for NoopLayer {}

pub fn noop_layer<S>() -> BoxLayer<S>
where
    S: Subscriber + 'static,
{
    Box::new(NoopLayer)
}
