//! Login form update logic

use crate::message::{Command, LoginMessage};
use crate::model::App;

/// Handle a login form message
pub fn update(app: &mut App, msg: LoginMessage) -> Option<Command> {
    let login = &mut app.login;
    if login.submitting {
        return None;
    }

    match msg {
        LoginMessage::NextField | LoginMessage::PrevField => {
            login.focus = login.focus.next();
        }

        LoginMessage::Input(c) => {
            login.focused_input().push(c);
            login.error = None;
        }

        LoginMessage::Backspace => {
            login.focused_input().pop();
        }

        LoginMessage::ToggleSecret => {
            login.show_password = !login.show_password;
        }

        LoginMessage::Submit => {
            let email = login.email.trim();
            if email.is_empty() || login.password.is_empty() {
                login.error = Some("Enter your email and password".to_string());
                return None;
            }

            login.submitting = true;
            login.error = None;
            return Some(Command::Login {
                email: email.to_string(),
                password: login.password.clone(),
            });
        }
    }

    None
}
