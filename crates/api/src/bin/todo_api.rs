use lean_api::service::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lean_api::server::run(Service::Todo).await
}
