mod manager;
mod types;

pub use manager::TaskManager;
pub use types::{
    StoreFailure,
    TaskResult,
};
