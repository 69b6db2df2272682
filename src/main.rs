//! Scripted storefront session: a vendor publishes two products, a customer orders
//! them, and staff reviews every order.
//!
//! ```bash
//! cargo run -- [path/to/storefront.yaml]
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use storefront::api::{ApiError, Caller, OrderListParams, OrderRequest, ProductRequest};
use storefront::config::AppConfig;
use storefront::lifecycle::{setup_tracing, StoreSystem};
use storefront::model::{LineRequest, ProductQuery, UserCreate};
use tracing::{error, info, Instrument};

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}:\n{}", label, serde_json::to_string_pretty(value)?);
    Ok(())
}

fn user(username: &str, is_staff: bool) -> UserCreate {
    UserCreate {
        username: username.to_string(),
        email: format!("{}@storefront.test", username),
        is_staff,
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let config = AppConfig::load(config_path.as_deref())?;
    setup_tracing(&config.log);

    info!("Starting storefront");
    let system = StoreSystem::with_config(&config.store);
    let api = system.api();

    let vendor_id = system.user_client.create_user(user("vendor", false)).await?;
    let customer_id = system.user_client.create_user(user("customer", false)).await?;
    let staff_id = system.user_client.create_user(user("staff", true)).await?;

    let vendor = api.authenticate(vendor_id).await?;
    let customer = api.authenticate(customer_id).await?;
    let staff = api.authenticate(staff_id).await?;

    let span = tracing::info_span!("catalogue");
    let (lamp, mug) = async {
        let lamp = api
            .create_product(
                &vendor,
                ProductRequest {
                    name: "Desk Lamp".into(),
                    description: "Adjustable arm".into(),
                    price: Decimal::from(10),
                    stock: Some(20),
                },
            )
            .await?;
        let mug = api
            .create_product(
                &vendor,
                ProductRequest {
                    name: "Mug".into(),
                    description: String::new(),
                    price: Decimal::from(5),
                    stock: None,
                },
            )
            .await?;
        Ok::<_, ApiError>((lamp.body.id, mug.body.id))
    }
    .instrument(span)
    .await?;

    let bootleg = ProductRequest {
        name: "Bootleg".into(),
        description: String::new(),
        price: Decimal::ONE,
        stock: None,
    };
    match api.create_product(&Caller::Anonymous, bootleg).await {
        Ok(_) => error!("Anonymous product creation was accepted"),
        Err(e) => info!(status = %e.status(), "Anonymous product creation refused"),
    }

    let products = api.list_products(&Caller::Anonymous, ProductQuery::default()).await?;
    print_json("products", &products.body)?;

    let span = tracing::info_span!("checkout");
    let order = async {
        api.create_order(
            &customer,
            OrderRequest {
                items: vec![LineRequest::new(lamp, 2), LineRequest::new(mug, 3)],
                notes: Some("Leave at the door".into()),
            },
        )
        .await
    }
    .instrument(span)
    .await?;
    println!("created ({}):", order.status);
    print_json("order", &order.body)?;

    let mine = api.list_orders(&customer, OrderListParams::default()).await?;
    let all = api.list_orders(&staff, OrderListParams::default()).await?;
    let vendors = api.list_orders(&vendor, OrderListParams::default()).await?;
    info!(
        customer = mine.body.len(),
        staff = all.body.len(),
        vendor = vendors.body.len(),
        "Orders visible"
    );

    drop(api);
    system.shutdown().await?;

    info!("Storefront session complete");
    Ok(())
}
