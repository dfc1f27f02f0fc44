//! Product category endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{NewCategory, ProductCategory};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<ProductCategory>> {
        self.request(ApiRequest::get("/product-categories")).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<ProductCategory> {
        let request = ApiRequest::post("/product-categories").with_body(category)?;
        self.request(request).await
    }

    pub async fn rename_category(&self, id: i64, name: &str) -> Result<ProductCategory> {
        let request = ApiRequest::put(format!("/product-categories/{id}"))
            .with_body(&serde_json::json!({ "name": name }))?;
        self.request(request).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/product-categories/{id}")))
            .await
    }
}
