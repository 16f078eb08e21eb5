use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Same normalization as sign-up, so stored usernames are found again.
    pub fn validate(self) -> Result<LoginDto, AppError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please enter both username and password."));
        }
        Ok(LoginDto {
            username: username.to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SignUpForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SignUpForm {
    pub fn validate(self) -> Result<NewAdminDto, AppError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please enter both username and password."));
        }
        Ok(NewAdminDto {
            username: self.username.trim().to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewAdminDto {
    pub username: String,
    pub password: String,
}

/// Raw add-event form; date and time arrive as the strings browser inputs produce.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewEventForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub description: String,
}

impl NewEventForm {
    pub fn validate(self) -> Result<NewEventDto, AppError> {
        let name = self.name.trim();
        let venue = self.venue.trim();
        if name.is_empty() || self.date.trim().is_empty() || self.time.trim().is_empty() || venue.is_empty() {
            return Err(AppError::validation(
                "Please fill in all required fields: Name, Date, Time, and Venue.",
            ));
        }
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        Ok(NewEventDto {
            name: name.to_string(),
            date,
            time,
            venue: venue.to_string(),
            description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventDto {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeleteEventForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingForm {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_phone: String,
}

impl BookingForm {
    pub fn validate(self) -> Result<NewBookingDto, AppError> {
        let user_name = self.user_name.trim();
        let user_phone = self.user_phone.trim();
        if user_name.is_empty() || user_phone.is_empty() {
            return Err(AppError::validation("Please enter your name and phone number."));
        }
        Ok(NewBookingDto {
            event_name: self.event_name,
            user_name: user_name.to_string(),
            user_phone: user_phone.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingDto {
    pub event_name: String,
    pub user_name: String,
    pub user_phone: String,
}

/// Query string of `GET /admin`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminPageQuery {
    pub mode: Option<String>,
    pub event: Option<String>,
}

impl AdminPageQuery {
    pub fn wants_signup(&self) -> bool {
        self.mode.as_deref() == Some("signup")
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SessionClaims {
    pub sub: String,
    /// The admin's session version at login; logout bumps it and so
    /// invalidates every token issued before.
    pub ver: i64,
    pub exp: usize,
}

impl SessionClaims {
    pub fn new(username: &str, ver: i64, exp: usize) -> Self {
        Self {
            sub: username.to_string(),
            ver,
            exp,
        }
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("'{}' is not a valid date (expected YYYY-MM-DD).", raw.trim())))
}

/// Accepts `HH:MM` as sent by `<input type="time">` as well as `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("'{}' is not a valid time (expected HH:MM).", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gala_form() -> NewEventForm {
        NewEventForm {
            name: "Gala".to_string(),
            date: "2025-12-01".to_string(),
            time: "19:00".to_string(),
            venue: "Hall A".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn event_form_parses_browser_values() {
        let dto = gala_form().validate().unwrap();
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(dto.time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(dto.description, None);
    }

    #[test]
    fn event_form_requires_venue() {
        let form = NewEventForm {
            venue: "   ".to_string(),
            ..gala_form()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, AppError::ValidationFailure { .. }));
    }

    #[test]
    fn event_form_rejects_garbage_date() {
        let form = NewEventForm {
            date: "next friday".to_string(),
            ..gala_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn time_accepts_seconds() {
        assert_eq!(parse_time("07:30:15").unwrap(), NaiveTime::from_hms_opt(7, 30, 15).unwrap());
    }

    #[test]
    fn booking_form_requires_name_and_phone() {
        let form = BookingForm {
            event_name: "Gala".to_string(),
            user_name: "Bob".to_string(),
            user_phone: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn login_trims_username_like_sign_up() {
        let login = LoginForm {
            username: " alice ".to_string(),
            password: "secret".to_string(),
        }
        .validate()
        .unwrap();
        let sign_up = SignUpForm {
            username: " alice ".to_string(),
            password: "secret".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(login.username, sign_up.username);
        assert_eq!(login.password, "secret");
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            username: "   ".to_string(),
            password: "secret".to_string(),
        };
        assert!(matches!(form.validate(), Err(AppError::ValidationFailure { .. })));
    }

    #[test]
    fn sign_up_requires_password() {
        let form = SignUpForm {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());
    }
}
