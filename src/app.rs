use std::sync::Arc;

use poem::middleware::{SetHeader, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;
use sea_orm::DatabaseConnection;

use crate::api::{HealthApi, ItemApi};
use crate::config::AppSettings;
use crate::middleware::RequestId;
use crate::stores::ItemStore;

/// Assemble the complete HTTP application
///
/// Mounts the API at the root, the OpenAPI document at `/doc` and Swagger UI
/// at `/swagger`, then wraps everything in the middleware chain.
pub fn create_app(settings: &AppSettings, db: DatabaseConnection) -> impl Endpoint {
    let item_store = Arc::new(ItemStore::new(db));

    let api_service = OpenApiService::new(
        (HealthApi, ItemApi::new(item_store)),
        settings.app_name.clone(),
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}:{}", settings.host, settings.port));

    let spec = api_service.spec_endpoint();
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/doc", spec)
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(SetHeader::new().appending("X-App-Id", settings.app_name.clone()))
        .with(RequestId)
        .with(Tracing)
}
