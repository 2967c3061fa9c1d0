pub mod backend_impl;
pub mod customer_delete_impl;
pub mod customer_read_impl;
pub mod customer_save_impl;
pub mod schema;

pub use backend_impl::SqliteBackend;
pub use customer_delete_impl::SqliteCustomerDeleter;
pub use customer_read_impl::SqliteCustomerReader;
pub use customer_save_impl::SqliteCustomerSaver;
