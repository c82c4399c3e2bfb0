mod brush_panel;
mod central_panel;
mod dialogs;
mod home;
mod toolbar;

pub use brush_panel::brush_panel;
pub use central_panel::central_panel;
pub use dialogs::dialogs;
pub use home::home_screen;
pub use toolbar::toolbar;
