use utoipa::OpenApi;

/// Combined OpenAPI document for the inventory service
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = utoipa::openapi::OpenApiBuilder::new()
            .info(
                utoipa::openapi::InfoBuilder::new()
                    .title("Inventory API")
                    .version(env!("CARGO_PKG_VERSION"))
                    .build(),
            )
            .build();

        doc.merge(crate::api::health::HealthApiDoc::openapi());
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}
