//! Cost type and product cost endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{CostType, NewCostType, NewProductCost, ProductCost};

impl ApiClient {
    pub async fn list_cost_types(&self) -> Result<Vec<CostType>> {
        self.request(ApiRequest::get("/cost-type")).await
    }

    pub async fn create_cost_type(&self, cost_type: &NewCostType) -> Result<CostType> {
        let request = ApiRequest::post("/cost-type").with_body(cost_type)?;
        self.request(request).await
    }

    pub async fn delete_cost_type(&self, id: i64) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/cost-type/{id}")))
            .await
    }

    /// Cost entries attached to one product.
    pub async fn list_product_costs(&self, product_id: i64) -> Result<Vec<ProductCost>> {
        self.request(ApiRequest::get("/product-cost").with_query("productId", product_id))
            .await
    }

    pub async fn create_product_cost(&self, cost: &NewProductCost) -> Result<ProductCost> {
        let request = ApiRequest::post("/product-cost").with_body(cost)?;
        self.request(request).await
    }

    pub async fn delete_product_cost(&self, id: i64) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/product-cost/{id}")))
            .await
    }
}
