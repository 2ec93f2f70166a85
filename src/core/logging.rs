use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .with_target(false)
        .init();
}
