pub mod app;
pub mod detail_panel;
pub mod filter_select;
pub mod map_controls;
pub mod map_legend;
pub mod performance_map;
pub mod region_layer;

pub use app::App;
