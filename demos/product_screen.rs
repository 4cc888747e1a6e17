//! Fetches one product and prints it, the way the product screen does on load.
//!
//! Run with: `cargo run --example product_screen`
//!
//! Set `APPSERVICES_DEVELOPER_MODE=0` to see the error text an end user would get.

use appservices::{AppService, DisplayMode, Parameters, ServiceMethod};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Product {
    id: Option<u64>,
    title: Option<String>,
    description: Option<String>,
    price: Option<i64>,
    rating: Option<f32>,
    brand: Option<String>,
    category: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), appservices::Error> {
    tracing_subscriber::fmt()
        .with_env_filter("appservices=debug,product_screen=info")
        .init();

    // Only sent when the screen switches to POST.
    let parameters = Parameters::new();

    let service = AppService::<Product>::new()?.with_parameters(parameters);

    match service
        .call("https://dummyjson.com/products/1", ServiceMethod::Get)
        .await
    {
        Ok(product) => println!("{product:#?}"),
        Err(e) => println!("{}", e.showable_description(DisplayMode::from_env())),
    }

    Ok(())
}
