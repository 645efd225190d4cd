use clap::Parser;
use serde_json::json;
use tracing::{error, info, Instrument};

use order_desk::seed::load_seed;
use order_desk::{setup_tracing, Config, OrderPayload, OrderStore, OrderSystem, Reply};

fn log_reply(operation: &str, reply: &Reply) {
    match reply.json() {
        Ok(body) => info!(
            operation,
            status = reply.status,
            body = %body.unwrap_or_default(),
            "Reply"
        ),
        Err(e) => error!(operation, error = %e, "Reply body could not be rendered"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing(&config.log_filter)?;

    info!("Starting order desk");

    let store = match &config.seed {
        Some(path) => load_seed(path).await?,
        None => OrderStore::new(),
    };
    let system = OrderSystem::new(config.buffer_size, store);
    let client = system.order_client.clone();

    let span = tracing::info_span!("order_lifecycle");
    async {
        let body = json!({ "data": {
            "deliverTo": "120 Orange St",
            "mobileNumber": "555-1234",
            "dishes": [{ "name": "Taco", "quantity": 2 }],
        }});
        let reply = Reply::from_result(client.create_order(OrderPayload::from_body(&body)).await);
        log_reply("create", &reply);

        let Some(id) = reply.order().map(|order| order.id.clone()) else {
            error!("Order creation failed, skipping the rest of the walkthrough");
            return;
        };

        log_reply("list", &Reply::from_result(client.list_orders().await));
        log_reply("read", &Reply::from_result(client.read_order(id.clone()).await));

        let body = json!({ "data": {
            "id": id,
            "status": "preparing",
            "deliverTo": "120 Orange St",
            "mobileNumber": "555-1234",
            "dishes": [{ "name": "Taco", "quantity": 3 }],
        }});
        let reply = client.update_order(id.clone(), OrderPayload::from_body(&body)).await;
        log_reply("update", &Reply::from_result(reply));

        // Rejected: the order is no longer pending.
        log_reply("delete", &Reply::from_result(client.delete_order(id).await));
    }
    .instrument(span)
    .await;

    drop(client);
    system.shutdown().await?;

    info!("Order desk stopped");
    Ok(())
}
