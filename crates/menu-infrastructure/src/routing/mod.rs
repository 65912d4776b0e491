//! Named route table (URL reverse and path resolution)

pub mod route_table;

pub use route_table::RouteTable;
