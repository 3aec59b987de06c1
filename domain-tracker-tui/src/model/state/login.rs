//! Login page state

/// Login form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Login page state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    /// A login request is in flight
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer of the focused input.
    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Forget the typed password, keep the email for the next attempt.
    pub fn reset(&mut self) {
        self.password.clear();
        self.focus = if self.email.is_empty() {
            LoginField::Email
        } else {
            LoginField::Password
        };
        self.submitting = false;
    }
}
