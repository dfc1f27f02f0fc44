//! Product endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{NewProduct, Product, ProductUpdate, SaleDetails};

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.request(ApiRequest::get("/products")).await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.request(ApiRequest::get(format!("/products/{id}"))).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        let request = ApiRequest::post("/products").with_body(product)?;
        self.request(request).await
    }

    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> Result<Product> {
        let request = ApiRequest::put(format!("/products/{id}")).with_body(update)?;
        self.request(request).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/products/{id}")))
            .await
    }

    /// Record a sale, moving the product into its sold state.
    pub async fn mark_product_sold(&self, id: i64, sale: &SaleDetails) -> Result<Product> {
        let request = ApiRequest::post(format!("/products/{id}/sold")).with_body(sale)?;
        self.request(request).await
    }

    /// Revert a sale, clearing the recorded sale details.
    pub async fn mark_product_unsold(&self, id: i64) -> Result<Product> {
        self.request(ApiRequest::post(format!("/products/{id}/unsold")))
            .await
    }
}
