//! # System Lifecycle
//!
//! Starts the three store actors, wires their clients into an
//! [`OrderPlacementWorkflow`](crate::workflow::OrderPlacementWorkflow), and shuts
//! everything down again.
//!
//! ## Wiring
//!
//! The stores have no dependencies on each other. Only the workflow depends on
//! all three, and it holds clones of their clients:
//!
//! ```text
//! OrderSystem
//! ├── customer store ◄─┐
//! ├── product store  ◄─┼── OrderPlacementWorkflow
//! └── order store    ◄─┘
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**, including the clones inside the workflow. This closes
//!    the sending side of every store channel.
//! 2. **Stores detect closure** when `receiver.recv()` returns `None`, and log
//!    their final size.
//! 3. **Await completion** of every actor task.
//!
//! A client cloned out of the system and still alive keeps its store running,
//! so [`OrderSystem::shutdown`] waits for it to be dropped.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # One line per placed or rejected order
//! RUST_LOG=debug cargo run     # Full request payloads
//! ```

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
