//! # Observability & Tracing
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber`
//! formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup and shutdown of each store, with its final size
//! - **Store Requests**: every insert, create, lookup and change batch
//! - **Placement**: one span per [`place`](crate::workflow::OrderPlacementWorkflow::place)
//!   call carrying `customer_id` and `lines`
//! - **Rejections**: a `warn` line naming the validation that failed
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO place: Order stored order_id=order_1 customer_id=c1 lines=1
//! INFO place: Order placed order_id=order_1 items=1 total=20.0 customer_id=c1 lines=1
//! WARN place: Rejected request error=Insufficient stock for p1: requested 10, available 3 customer_id=c1 lines=1
//! ```
//!
//! **With `RUST_LOG=debug`**, each entry point also logs its payload once:
//!
//! ```text
//! DEBUG place: place called request=OrderRequest { customer_id: CustomerId("c1"), products: [...] }
//! DEBUG place:update_quantity: update_quantity called items=[RequestedProduct { id: ProductId("p1"), quantity: 2 }]
//! ```

/// Installs the global subscriber.
///
/// Panics if a global subscriber is already set, so call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
