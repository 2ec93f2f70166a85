use irrigation_devkit::config::load_server_config;
use irrigation_devkit::core::error::AppError;
use irrigation_devkit::core::logging::init_tracing;
use irrigation_devkit::server::serve;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_server_config()?;
    serve(&config).await
}
