use authorizer_bridge::{main_impl, CoreInterface};

#[tokio::main]
async fn main() -> Result<(), String> {
    main_impl::<CoreInterface>().await
}
