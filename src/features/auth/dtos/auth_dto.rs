use serde::Deserialize;
use validator::Validate;

use crate::shared::validation::USERNAME_REGEX;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(
        length(min = 3, max = 80, message = "Username must be 3-80 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 120, message = "Email must not exceed 120 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
