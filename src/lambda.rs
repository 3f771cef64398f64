#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use roman_arabic::http::gateway::{self, GatewayRequest, GatewayResponse};
#[cfg(feature = "lambda")]
use roman_arabic::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use roman_arabic::LambdaConfig;

#[cfg(feature = "lambda")]
async fn function_handler(
    event: LambdaEvent<GatewayRequest>,
    config: &LambdaConfig,
) -> Result<GatewayResponse, Error> {
    let response = gateway::handle(&event.payload, &config.allowed_origin);

    tracing::info!(
        request_id = %event.context.request_id,
        status = response.status_code,
        "Conversion function completed"
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    config.validate()?;

    let config = &config;
    run(service_fn(move |event| async move { function_handler(event, config).await })).await
}
