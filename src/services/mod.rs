pub mod store;

pub use store::{InMemorySchoolStore, SchoolStore, StoreError};
