//! OpenAPI document for the REST surface

use super::{dto::UpdateResponse, error::Problem, handlers};
use crate::contract::DeviceSettings;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixel controller settings",
        description = "Read and replace the LED pixel controller configuration"
    ),
    paths(handlers::get_settings, handlers::update_settings),
    components(schemas(DeviceSettings, UpdateResponse, Problem)),
    tags((name = "device-settings", description = "Device settings endpoints"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"]["/settings"]["get"].is_object());
        assert!(doc["paths"]["/update"]["post"].is_object());
        assert!(doc["components"]["schemas"]["DeviceSettings"]["properties"]["nodeName"].is_object());
    }
}
