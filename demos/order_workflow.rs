//! Order workflow driven by the transition engine.
//!
//! Run with `RUST_LOG=debug cargo run --example order_workflow` to see the
//! engine's own log lines next to the hooks' output.

use futures::FutureExt;
use serde_json::{json, Value};
use statehook::builder::{simple_transition, EngineBuilder, TransitionBuilder};
use statehook::core::TransitionContext;
use statehook::engine::{TransitionDetails, TransitionError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Order Workflow ===\n");

    let engine = EngineBuilder::<String, Value>::new()
        .initial("pending".to_string())
        .transition(
            TransitionBuilder::<String, Value>::new()
                .from("pending".to_string())
                .to("paid".to_string())
                .abortable()
                .details(
                    TransitionDetails::new()
                        .label("Pay")
                        .description("Capture payment for the order")
                        .allow_actor("customer"),
                )
                .on_before(|order| {
                    async move {
                        let total = order["total"].as_u64().unwrap_or(0);
                        let tendered = order["tendered"].as_u64().unwrap_or(0);
                        if tendered < total {
                            return Err(TransitionError::abort_with_meta(
                                "insufficient payment",
                                json!({ "missing": total - tendered }),
                            ));
                        }
                        Ok(())
                    }
                    .boxed()
                }),
        )
        .and_then(|builder| {
            builder.transition(
                TransitionBuilder::<String, Value>::new()
                    .from("paid".to_string())
                    .to("shipped".to_string())
                    .on_after(|order| {
                        async move {
                            order["tracking"] = json!("TRK-0001");
                            Ok(())
                        }
                        .boxed()
                    }),
            )
        })
        .and_then(|builder| {
            builder.add_transition(simple_transition(
                "pending".to_string(),
                "cancelled".to_string(),
            ))
        })
        .and_then(|builder| {
            builder
                .after_transition(|payload| async move {
                    println!(
                        "  [audit] {} -> {} by {}",
                        payload.from,
                        payload.to,
                        payload.actor.as_deref().unwrap_or("system")
                    );
                    Ok(())
                })
                .on_invalid_transition(|payload| {
                    println!("  [invalid] {} -> {}", payload.from, payload.to);
                })
                .on_error(|error, payload| {
                    println!("  [error] {} ({})", error, payload.transition_id);
                })
                .build()
        });

    let engine = match engine {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("Failed to build engine: {error}");
            return;
        }
    };

    let mut order = json!({ "id": 1, "status": "pending", "total": 40, "tendered": 25 });
    let customer = TransitionContext::new().actor("customer");

    println!("Paying with insufficient funds:");
    engine
        .transition_with(&mut order, "paid".to_string(), customer.clone())
        .await;
    println!("  status: {}\n", order["status"]);

    println!("Paying in full:");
    order["tendered"] = json!(40);
    engine
        .transition_with(&mut order, "paid".to_string(), customer)
        .await;
    println!("  status: {}\n", order["status"]);

    println!("Cancelling a paid order:");
    engine.transition(&mut order, "cancelled".to_string()).await;
    println!("  status: {}\n", order["status"]);

    println!("Shipping:");
    engine.transition(&mut order, "shipped".to_string()).await;
    println!("  status: {}, tracking: {}", order["status"], order["tracking"]);
}
