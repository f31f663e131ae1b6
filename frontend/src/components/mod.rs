pub mod bet_panel;
pub mod wheel_canvas;
pub mod wheel_controls;

pub use bet_panel::BetPanel;
pub use wheel_canvas::WheelCanvas;
pub use wheel_controls::{ColorPicker, ResultDisplay, SpinButton};
