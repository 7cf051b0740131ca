use serde::Serialize;
use std::time::Duration;

/// Stand-in for network latency on submit.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Submit delay in the millisecond units browser timers take.
pub fn submit_delay_ms() -> u32 {
    u32::try_from(SIMULATED_SUBMIT_DELAY.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactPayload,
    pub submitting: bool,
}

impl ContactForm {
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting
    }

    /// Locks the form and hands back the captured payload. Returns `None`
    /// while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.fields.clone())
    }

    pub fn finish_submit(&mut self) {
        self.fields = ContactPayload::default();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Amina");
        form.set_field(Field::Email, "amina@example.com");
        form.set_field(Field::Message, "Salam!");
        form
    }

    #[test]
    fn submit_disables_control_until_finished() {
        let mut form = filled_form();
        assert!(!form.submit_disabled());

        let payload = form.begin_submit().expect("first submit is accepted");
        assert_eq!(payload.email, "amina@example.com");
        assert!(form.submit_disabled());
        assert_eq!(form.begin_submit(), None);

        form.finish_submit();
        assert!(!form.submit_disabled());
        assert_eq!(form.fields, ContactPayload::default());
    }

    #[test]
    fn submit_delay_fits_a_browser_timer() {
        assert_eq!(submit_delay_ms(), 1500);
    }

    #[test]
    fn field_names_map_to_fields() {
        assert_eq!(Field::from_name("message"), Some(Field::Message));
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn payload_serializes_for_logging() {
        let payload = filled_form().fields;
        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(json["name"], "Amina");
    }
}
