//! # API Route Modules
//!
//! - `reviews` — review submission (the verification pipeline's transport
//!   adapter) and the public review listings, flat and grouped by
//!   college/department.

pub mod reviews;
