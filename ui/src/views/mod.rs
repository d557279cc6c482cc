mod dashboard;
mod home;
mod register;
mod team;

pub use dashboard::Dashboard;
pub use home::Home;
pub use register::{
    password_strength, validate_registration, PasswordStrength, Register, RegistrationError,
    RegistrationForm,
};
pub use team::{Team, TeamMember, TEAM};
