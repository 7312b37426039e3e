mod activity;
pub use activity::ActivityLogView;

mod change_password;
pub use change_password::ChangePasswordView;

mod login;
pub use login::LoginView;

mod password_checklist;
pub use password_checklist::PasswordChecklist;

mod profile;
pub use profile::ProfileView;

mod register;
pub use register::RegisterView;

mod shell;
pub use shell::AppShell;
