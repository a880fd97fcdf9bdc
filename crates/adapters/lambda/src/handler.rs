//! Lambda entry points.

use lambda_runtime::{Context, LambdaEvent};

use moviehub_app::invocation::InvocationContext;
use moviehub_app::ports::{InvocationLog, RecordRepository};
use moviehub_app::services::ingest_service::RecordIngestService;
use moviehub_domain::error::MoviehubError;

use crate::error::ApiError;
use crate::event::ApiGatewayProxyEvent;
use crate::response::ApiGatewayProxyResponse;

/// Extract the request id and function name from the Lambda context.
#[must_use]
pub fn invocation_context(context: &Context) -> InvocationContext {
    InvocationContext::new(
        context.request_id.clone(),
        context.env_config.function_name.clone(),
    )
}

/// Run one event through the ingest use-case.
///
/// # Errors
///
/// Returns storage and configuration errors untouched; validation errors are
/// turned into a `400` response instead.
pub async fn handle_event<R, L>(
    service: &RecordIngestService<R, L>,
    event: &ApiGatewayProxyEvent,
    context: &InvocationContext,
) -> Result<ApiGatewayProxyResponse, MoviehubError>
where
    R: RecordRepository,
    L: InvocationLog,
{
    match service.ingest(&event.to_request(), context).await {
        Ok(_) => Ok(ApiGatewayProxyResponse::success()),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// `lambda_runtime` handler: unpacks the event and forwards to [`handle_event`].
///
/// # Errors
///
/// Any non-validation failure is returned as a Lambda invocation error.
pub async fn function_handler<R, L>(
    service: &RecordIngestService<R, L>,
    event: LambdaEvent<ApiGatewayProxyEvent>,
) -> Result<ApiGatewayProxyResponse, lambda_runtime::Error>
where
    R: RecordRepository,
    L: InvocationLog,
{
    let (payload, context) = event.into_parts();
    let context = invocation_context(&context);
    handle_event(service, &payload, &context)
        .await
        .map_err(Into::into)
}
