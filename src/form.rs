use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

/// The contact form as posted to the message endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Returns the first field that would block submission, in form order.
    /// Only the e-mail is trimmed before checking; the other fields just have
    /// to be non-empty.
    pub fn first_invalid(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| match field {
            FormField::Email => !looks_like_email(self.email.trim()),
            _ => self.get(*field).is_empty(),
        })
    }

    /// The form as it goes on the wire, with surrounding whitespace removed
    /// from the e-mail address.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }
}

/// `local@domain`, one `@`, no whitespace. A dot in the domain is not required.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Pentest".into(),
            message: "Please scope our web app.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().first_invalid(), None);
    }

    #[test]
    fn empty_fields_are_reported_in_order() {
        let mut form = filled();
        form.subject.clear();
        form.message.clear();
        assert_eq!(form.first_invalid(), Some(FormField::Subject));
    }

    #[test]
    fn whitespace_only_text_counts_as_filled() {
        let mut form = filled();
        form.name = "   ".into();
        form.subject = " ".into();
        form.message = "\n".into();
        assert_eq!(form.first_invalid(), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["", "   ", "jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c.d"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.first_invalid(), Some(FormField::Email), "{bad:?}");
        }
    }

    #[test]
    fn email_without_dot_and_padded_email_are_accepted() {
        for good in ["jane@example", "  jane@example.com  "] {
            let mut form = filled();
            form.email = good.into();
            assert_eq!(form.first_invalid(), None, "{good:?}");
        }
    }

    #[test]
    fn normalized_trims_only_the_email() {
        let mut form = filled();
        form.email = " jane@example.com\t".into();
        form.name = " Jane ".into();
        let sent = form.normalized();
        assert_eq!(sent.email, "jane@example.com");
        assert_eq!(sent.name, " Jane ");
    }

    #[test]
    fn serializes_the_four_fields() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["subject"], "Pentest");
        assert_eq!(json["message"], "Please scope our web app.");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn field_focus_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Message);
    }

    #[test]
    fn clear_empties_everything() {
        let mut form = filled();
        form.clear();
        assert!(form.is_empty());
    }
}
