use autostack_api::{server, ServiceKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    server::run(ServiceKind::Inventory).await
}
