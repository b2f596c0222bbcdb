use once_cell::sync::Lazy;
use regex::Regex;

// Requires at least one dot after @ for the TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

static USER_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap());

pub const USER_ID_MAX_LENGTH: usize = 32;
pub const NAME_MAX_LENGTH: usize = 64;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Input format checks shared by the account forms
pub struct Validator;

impl Validator {
    /// ```
    /// use lighter_account::security::Validator;
    ///
    /// assert!(Validator::validate_email("park@naver.com"));
    /// assert!(!Validator::validate_email("park@naver"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 255 {
            return false;
        }

        if email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    /// Letters, digits, `_`, `-` and `.`, at most 32 characters
    ///
    /// ```
    /// use lighter_account::security::Validator;
    ///
    /// assert!(Validator::validate_user_id("comac"));
    /// assert!(!Validator::validate_user_id("co mac"));
    /// ```
    pub fn validate_user_id(user_id: &str) -> bool {
        !user_id.is_empty() && user_id.len() <= USER_ID_MAX_LENGTH && USER_ID_REGEX.is_match(user_id)
    }

    /// Counted in characters, not bytes
    pub fn validate_name(name: &str) -> bool {
        let length = name.chars().count();
        length > 0 && length <= NAME_MAX_LENGTH && !name.chars().any(char::is_control)
    }

    pub fn validate_password(password: &str) -> bool {
        !password.is_empty() && password.len() <= PASSWORD_MAX_LENGTH
    }
}
