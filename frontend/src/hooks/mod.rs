pub mod use_alert_timer;
pub mod use_login;
pub mod use_resource_list;
