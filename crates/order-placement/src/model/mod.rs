//! Data carried through order placement: customers, products, orders and the
//! incoming request.

pub mod customer;
pub mod order;
pub mod product;
pub mod request;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use request::*;
