mod detail_tests;
mod export_tests;
mod favorites_tests;
mod radar_tests;
