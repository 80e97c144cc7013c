use tracing::Level;
use tracing_subscriber::{
    fmt::writer::{MakeWriter, MakeWriterExt, OrElse, WithMaxLevel},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(split_writer(std::io::stderr, std::io::stdout))
                .compact(),
        )
        .init();
}

/// Sends warnings and errors to `errors`, everything else to `output`.
pub fn split_writer<E, O>(errors: E, output: O) -> OrElse<WithMaxLevel<E>, O>
where
    E: for<'a> MakeWriter<'a>,
    O: for<'a> MakeWriter<'a>,
{
    errors.with_max_level(Level::WARN).or_else(output)
}
