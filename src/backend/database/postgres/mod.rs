pub mod backend_impl;
pub mod customer_delete_impl;
pub mod customer_read_impl;
pub mod customer_save_impl;
pub mod schema;

pub use backend_impl::PostgresBackend;
pub use customer_delete_impl::PostgresCustomerDeleter;
pub use customer_read_impl::PostgresCustomerReader;
pub use customer_save_impl::PostgresCustomerSaver;
