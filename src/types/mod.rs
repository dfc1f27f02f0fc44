//! Wire models for the Trade Tracker API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user identity, cached alongside the session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: Option<String>,
}

/// Sign-in payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Successful response from the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
}

/// A kind of expense that can be attached to products (shipping, repair, fees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCostType {
    pub name: String,
}

/// A single expense entry attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCost {
    pub id: i64,
    pub product_id: i64,
    pub cost_type_id: i64,
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductCost {
    pub product_id: i64,
    pub cost_type_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Free-form key/value detail attached to a product (size, condition, serial).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttribute {
    pub product_id: i64,
    pub name: String,
    pub value: String,
}

/// A tracked inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub purchase_price: f64,
    pub purchased_at: Option<DateTime<Utc>>,
    pub sold: bool,
    pub sale_price: Option<f64>,
    pub sold_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Profit (or loss) realized on this product: sale price minus purchase
    /// price and every cost entry attached to it. `None` while unsold.
    pub fn profit(&self, costs: &[ProductCost]) -> Option<f64> {
        if !self.sold {
            return None;
        }
        let sale_price = self.sale_price?;
        let expenses: f64 = costs
            .iter()
            .filter(|cost| cost.product_id == self.id)
            .map(|cost| cost.amount)
            .sum();
        Some(sale_price - self.purchase_price - expenses)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category_id: i64,
    pub purchase_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
}

/// Details recorded when a product is marked sold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetails {
    pub sale_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sold_product(id: i64, purchase: f64, sale: f64) -> Product {
        Product {
            id,
            name: "camera".to_string(),
            category_id: 1,
            purchase_price: purchase,
            purchased_at: None,
            sold: true,
            sale_price: Some(sale),
            sold_at: Some(Utc::now()),
        }
    }

    fn cost(product_id: i64, amount: f64) -> ProductCost {
        ProductCost {
            id: 0,
            product_id,
            cost_type_id: 1,
            amount,
            note: None,
        }
    }

    #[test]
    fn profit_subtracts_purchase_price_and_costs() {
        let product = sold_product(7, 100.0, 180.0);
        let costs = vec![cost(7, 15.0), cost(7, 5.0)];
        assert_eq!(product.profit(&costs), Some(60.0));
    }

    #[test]
    fn profit_ignores_other_products_costs() {
        let product = sold_product(7, 100.0, 150.0);
        let costs = vec![cost(7, 10.0), cost(8, 999.0)];
        assert_eq!(product.profit(&costs), Some(40.0));
    }

    #[test]
    fn profit_is_none_while_unsold() {
        let mut product = sold_product(7, 100.0, 150.0);
        product.sold = false;
        assert_eq!(product.profit(&[]), None);
    }

    #[test]
    fn profit_can_be_negative() {
        let product = sold_product(7, 100.0, 80.0);
        assert_eq!(product.profit(&[]), Some(-20.0));
    }

    #[test]
    fn product_uses_camel_case_wire_names() {
        let raw = serde_json::json!({
            "id": 1,
            "name": "camera",
            "categoryId": 2,
            "purchasePrice": 49.5,
            "purchasedAt": null,
            "sold": false,
            "salePrice": null,
            "soldAt": null
        });
        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.category_id, 2);
        assert_eq!(product.purchase_price, 49.5);
    }
}
