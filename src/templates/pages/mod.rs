pub mod bid_detail;
pub mod home;
pub mod radar;

pub use bid_detail::bid_detail_page;
pub use home::{home_page, HomeVm};
pub use radar::{radar_page, RadarVm};
