pub mod controls;
pub mod wheel_canvas;
pub mod winner_modal;

pub use controls::Controls;
pub use wheel_canvas::WheelCanvas;
pub use winner_modal::WinnerModal;
