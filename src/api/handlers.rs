//! # Request Handlers
//!
//! [`StoreApi`] is the request/response mapper: each method takes the caller and a
//! decoded request, applies the authorization predicates, talks to the stores through
//! their clients, and returns a representation with its HTTP status.

use super::auth::{
    can_modify_product, can_view_order, order_scope, require_authenticated, require_staff, Caller,
    Principal,
};
use super::repr::{users_in_orders, OrderRepr, ProductRepr, UserDirectory, UserSummary};
use super::requests::{OrderListParams, OrderRequest, ProductRequest};
use super::ApiError;
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::model::{
    Order, OrderCreate, OrderId, OrderQuery, OrderUpdate, Product, ProductCreate, ProductId,
    ProductQuery, ProductUpdate, UserId,
};
use actor_framework::ActorClient;
use http::StatusCode;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A successful reply: status plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: (),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(&self.body).map_err(|e| ApiError::Internal(e.to_string()))
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Handlers for the product and order endpoints.
#[derive(Clone)]
pub struct StoreApi {
    users: UserClient,
    products: ProductClient,
    orders: OrderClient,
}

impl StoreApi {
    pub fn new(users: UserClient, products: ProductClient, orders: OrderClient) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    /// Resolves a user id supplied by the transport's authentication into a [`Caller`].
    /// Unknown users are not authenticated.
    #[instrument(skip(self))]
    pub async fn authenticate(&self, user_id: UserId) -> Result<Caller, ApiError> {
        match self.users.get(user_id).await? {
            Some(user) => Ok(Caller::Authenticated(Principal {
                user_id: user.id,
                is_staff: user.is_staff,
            })),
            None => Err(ApiError::Unauthenticated),
        }
    }

    async fn directory(&self, ids: impl IntoIterator<Item = UserId>) -> Result<UserDirectory, ApiError> {
        let mut directory = UserDirectory::new();
        for id in ids {
            if directory.contains_key(&id) {
                continue;
            }
            match self.users.get(id).await? {
                Some(user) => {
                    directory.insert(id, UserSummary::from(&user));
                }
                None => warn!(user_id = %id, "Referenced user no longer exists"),
            }
        }
        Ok(directory)
    }

    async fn product_repr(&self, product: &Product) -> Result<ProductRepr, ApiError> {
        let users = self.directory([product.vendor_id]).await?;
        Ok(ProductRepr::new(product, &users))
    }

    async fn order_repr(&self, order: &Order) -> Result<OrderRepr, ApiError> {
        let users = self.directory(users_in_orders([order])).await?;
        Ok(OrderRepr::new(order, &users))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.products.get(id).await?.ok_or_else(ApiError::not_found)
    }

    /// Fetches an order the caller may see. Orders outside the caller's scope are
    /// reported exactly like orders that do not exist.
    async fn fetch_visible_order(&self, caller: &Caller, id: OrderId) -> Result<Order, ApiError> {
        let principal = require_authenticated(caller)?;
        match self.orders.get(id).await? {
            Some(order) if can_view_order(&principal, &order) => Ok(order),
            _ => Err(ApiError::not_found()),
        }
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Every product (optionally one vendor's), with its vendor. Open to anyone.
    #[instrument(skip(self))]
    pub async fn list_products(&self, _caller: &Caller, query: ProductQuery) -> ApiResult<Vec<ProductRepr>> {
        let products = self.products.list(query).await?;
        let users = self.directory(products.iter().map(|p| p.vendor_id)).await?;
        let body = products
            .iter()
            .map(|product| ProductRepr::new(product, &users))
            .collect();
        Ok(ApiResponse::ok(body))
    }

    #[instrument(skip(self))]
    pub async fn retrieve_product(&self, _caller: &Caller, id: ProductId) -> ApiResult<ProductRepr> {
        let product = self.fetch_product(id).await?;
        Ok(ApiResponse::ok(self.product_repr(&product).await?))
    }

    /// Publishes a product with the caller as its vendor.
    #[instrument(skip(self))]
    pub async fn create_product(&self, caller: &Caller, body: ProductRequest) -> ApiResult<ProductRepr> {
        let principal = require_authenticated(caller)?;
        let id = self
            .products
            .create_product(ProductCreate {
                vendor_id: principal.user_id,
                name: body.name,
                description: body.description,
                price: body.price,
                stock: body.stock,
            })
            .await?;
        info!(product_id = %id, vendor_id = %principal.user_id, "Product published");

        let product = self.fetch_product(id).await?;
        Ok(ApiResponse::created(self.product_repr(&product).await?))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        caller: &Caller,
        id: ProductId,
        body: ProductUpdate,
    ) -> ApiResult<ProductRepr> {
        let principal = require_authenticated(caller)?;
        let product = self.fetch_product(id).await?;
        if !can_modify_product(&principal, &product) {
            return Err(ApiError::Forbidden);
        }
        let updated = self.products.update_product(id, body).await?;
        Ok(ApiResponse::ok(self.product_repr(&updated).await?))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, caller: &Caller, id: ProductId) -> ApiResult<()> {
        let principal = require_authenticated(caller)?;
        let product = self.fetch_product(id).await?;
        if !can_modify_product(&principal, &product) {
            return Err(ApiError::Forbidden);
        }
        self.products.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(ApiResponse::no_content())
    }

    // ---------------------------------------------------------------------
    // Orders
    // ---------------------------------------------------------------------

    /// Orders in the caller's scope, narrowed by the optional filters.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, caller: &Caller, params: OrderListParams) -> ApiResult<Vec<OrderRepr>> {
        let principal = require_authenticated(caller)?;
        let query = OrderQuery {
            user_id: order_scope(&principal),
            status: params.status,
            min_total: params.min_total,
            max_total: params.max_total,
            created_from: params.created_from,
            created_to: params.created_to,
            order_number: None,
        };
        let orders = self.orders.list(query).await?;
        let users = self.directory(users_in_orders(&orders)).await?;
        let body = orders
            .iter()
            .map(|order| OrderRepr::new(order, &users))
            .collect();
        Ok(ApiResponse::ok(body))
    }

    #[instrument(skip(self))]
    pub async fn retrieve_order(&self, caller: &Caller, id: OrderId) -> ApiResult<OrderRepr> {
        let order = self.fetch_visible_order(caller, id).await?;
        Ok(ApiResponse::ok(self.order_repr(&order).await?))
    }

    /// Looks an order up by its `ORD-...` number, within the caller's scope.
    #[instrument(skip(self))]
    pub async fn retrieve_order_by_number(&self, caller: &Caller, order_number: &str) -> ApiResult<OrderRepr> {
        let principal = require_authenticated(caller)?;
        let query = OrderQuery {
            user_id: order_scope(&principal),
            order_number: Some(order_number.to_string()),
            ..Default::default()
        };
        let order = self
            .orders
            .list(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(ApiError::not_found)?;
        Ok(ApiResponse::ok(self.order_repr(&order).await?))
    }

    /// Checkout for the caller. Answers 201 with the stored order.
    #[instrument(skip(self))]
    pub async fn create_order(&self, caller: &Caller, body: OrderRequest) -> ApiResult<OrderRepr> {
        let principal = require_authenticated(caller)?;
        let id = self
            .orders
            .create_order(OrderCreate {
                user_id: principal.user_id,
                items: body.items,
                notes: body.notes,
            })
            .await?;

        let order = self
            .orders
            .get(id)
            .await?
            .ok_or_else(|| ApiError::Internal(format!("{} vanished after creation", id)))?;
        info!(order_id = %id, order_number = %order.order_number, total = %order.total, "Order placed");
        Ok(ApiResponse::created(self.order_repr(&order).await?))
    }

    /// Staff-only status and notes changes.
    #[instrument(skip(self))]
    pub async fn update_order(&self, caller: &Caller, id: OrderId, body: OrderUpdate) -> ApiResult<OrderRepr> {
        let principal = require_authenticated(caller)?;
        require_staff(&principal)?;
        let order = self.orders.update_order(id, body).await?;
        Ok(ApiResponse::ok(self.order_repr(&order).await?))
    }

    /// Cancels a pending order on behalf of its owner or staff.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, caller: &Caller, id: OrderId) -> ApiResult<OrderRepr> {
        self.fetch_visible_order(caller, id).await?;
        let order = self.orders.cancel_order(id).await?;
        info!(order_id = %id, "Order cancelled");
        Ok(ApiResponse::ok(self.order_repr(&order).await?))
    }
}
