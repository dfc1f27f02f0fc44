//! Product attribute endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{NewAttribute, ProductAttribute};

impl ApiClient {
    /// Attributes attached to one product.
    pub async fn list_product_attributes(&self, product_id: i64) -> Result<Vec<ProductAttribute>> {
        self.request(ApiRequest::get("/product-attribute").with_query("productId", product_id))
            .await
    }

    pub async fn create_product_attribute(
        &self,
        attribute: &NewAttribute,
    ) -> Result<ProductAttribute> {
        let request = ApiRequest::post("/product-attribute").with_body(attribute)?;
        self.request(request).await
    }

    pub async fn delete_product_attribute(&self, id: i64) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/product-attribute/{id}")))
            .await
    }
}
