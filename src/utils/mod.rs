pub mod checksum;

pub use checksum::checksum;
