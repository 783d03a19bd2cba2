/// UI layer: selector panels, egui_plot charts, and the state tile map.
pub mod charts;
pub mod map;
pub mod panels;
