//! Server-rendered pages. Markup lives in `templates/` (askama, HTML-escaped);
//! this module holds the template structs and the pure view models behind them.

pub mod home;
pub mod profile;
pub mod shell;
