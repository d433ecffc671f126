// Plain components
pub mod badge;
pub mod button;
pub mod card;
pub mod file_input;
pub mod form;
pub mod form_message;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_grid;
pub mod textarea;

// Built on `Input`
pub mod password_input;

// Primitive wrappers
pub mod label;
pub mod separator;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use file_input::*;
pub use form::*;
pub use form_message::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use password_input::*;
pub use separator::*;
pub use skeleton::*;
pub use stat_grid::*;
pub use textarea::*;
