pub mod alert_banner;
pub mod entry_form;
pub mod entry_table;
pub mod login_screen;
pub mod resource_screen;

pub use login_screen::LoginScreen;
pub use resource_screen::ResourceScreen;
