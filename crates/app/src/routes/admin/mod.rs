mod notifications;
mod settings;
mod users;

pub use notifications::AdminNotifications;
pub use settings::AdminSettings;
pub use users::AdminUsers;
