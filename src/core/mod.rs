pub mod date;
pub mod mapping;
pub mod resources;
pub mod service;

pub use crate::domain::model::VendorId;
pub use crate::domain::ports::{ErpGateway, UpstreamQuery};
pub use crate::utils::error::Result;
pub use resources::Resource;
pub use service::VendorService;
