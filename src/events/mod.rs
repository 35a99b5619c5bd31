pub mod fade;
pub mod menu;
pub mod modal;
pub mod scroll;

pub use fade::wire_fade_in;
pub use menu::wire_menu_toggle;
pub use modal::wire_project_modal;
pub use scroll::wire_smooth_scroll;
