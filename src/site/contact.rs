/// Contact page form. Submitting never leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Confirmation text for the user; clears every field.
    pub fn submit(&mut self) -> String {
        let confirmation = format!(
            "Thank you, {}! Your message has been sent.\n\nWe'll respond to {} soon.",
            self.name, self.email
        );
        tracing::debug!(subject_len = self.subject.len(), message_len = self.message.len(), "contact form submitted");
        *self = Self::default();
        confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_confirms_and_resets() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hi", "Hello there");
        let msg = form.submit();
        assert_eq!(
            msg,
            "Thank you, Ada! Your message has been sent.\n\nWe'll respond to ada@example.com soon."
        );
        assert_eq!(form, ContactForm::default());
    }
}
