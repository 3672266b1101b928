//! # Order Placement
//!
//! Validates a customer's order request against a product catalog, snapshots
//! catalog prices into line items, persists the order, and takes the ordered
//! units out of stock.
//!
//! ## Core Components
//!
//! - **[workflow]**: [`OrderPlacementWorkflow`](workflow::OrderPlacementWorkflow), the placement
//!   steps and their [`PlacementError`](workflow::PlacementError).
//! - **[ports]**: the collaborator traits the workflow depends on.
//! - **[model]**: customers, products, orders and the incoming request.
//! - **[customer_store]**, **[product_store]**, **[order_store]**: in-memory stores run as
//!   [`StoreActor`](store_actor::StoreActor)s.
//! - **[clients]**: typed store clients implementing the ports.
//! - **[config]**: placement policies and store sizing from the environment.
//! - **[lifecycle]**: starts, wires and stops everything as an
//!   [`OrderSystem`](lifecycle::OrderSystem).
//!
//! ## Testing
//!
//! Each client wraps a `StoreClient`, so a client built over
//! [`store_actor::mock::MockClient`] gives a workflow collaborator whose calls can
//! be scripted and asserted.

pub mod clients;
pub mod config;
pub mod customer_store;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod ports;
pub mod product_store;
pub mod workflow;
