//! Convenient re-exports for typical callers.

pub use crate::client::{ApiClient, ApiRequest};
pub use crate::config::ClientConfig;
pub use crate::error::{ApiError, ErrorCode, MessageCatalog, Result};
pub use crate::types::{
    AuthResponse, CostType, Credentials, NewAttribute, NewCategory, NewCostType, NewProduct,
    NewProductCost, Product, ProductAttribute, ProductCategory, ProductCost, ProductUpdate,
    SaleDetails, SignUpRequest, User,
};
