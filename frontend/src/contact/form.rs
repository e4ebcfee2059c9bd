/// Which input of the contact form an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    /// Hidden honeypot input. Real visitors never see it.
    Company,
}

impl Field {
    /// The `name` attribute used on the rendered input.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Company => "company",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub company: String,
}

impl ContactFormInput {
    pub fn update_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::Company => &mut self.company,
        };
        *slot = value;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Company => &self.company,
        }
    }

    /// Required-field gate. Matches the browser's `required` check, except that a
    /// name made only of whitespace is refused too.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && [&self.email, &self.phone, &self.message]
                .iter()
                .all(|v| !v.is_empty())
    }

    /// Any value at all in the honeypot, whitespace included, marks a bot.
    pub fn is_spam(&self) -> bool {
        !self.company.is_empty()
    }

    /// Captures the current values and leaves the live form blank.
    pub fn take_snapshot(&mut self) -> ContactFormInput {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormInput {
        ContactFormInput {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555-0100".to_string(),
            message: "Need a site".to_string(),
            company: String::new(),
        }
    }

    #[test]
    fn update_field_touches_only_one_field() {
        let mut form = filled();
        form.update_field(Field::Phone, "555-0199".to_string());

        assert_eq!(form.phone, "555-0199");
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@x.com");
        assert_eq!(form.message, "Need a site");
        assert_eq!(form.value(Field::Phone), "555-0199");
    }

    #[test]
    fn whitespace_name_is_not_complete() {
        let mut form = filled();
        assert!(form.is_complete());

        form.update_field(Field::Name, "   ".to_string());
        assert!(!form.is_complete());
    }

    #[test]
    fn whitespace_only_phone_or_message_still_passes_the_gate() {
        for field in [Field::Email, Field::Phone, Field::Message] {
            let mut form = filled();
            form.update_field(field, "   ".to_string());
            assert!(form.is_complete(), "{} only needs to be non-empty", field.input_name());
        }
    }

    #[test]
    fn each_required_field_blocks_when_empty() {
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            let mut form = filled();
            form.update_field(field, String::new());
            assert!(!form.is_complete(), "{} should be required", field.input_name());
        }
    }

    #[test]
    fn honeypot_is_not_required_and_flags_spam() {
        let mut form = filled();
        assert!(!form.is_spam());

        form.update_field(Field::Company, "Acme Bots LLC".to_string());
        assert!(form.is_spam());
        assert!(form.is_complete());

        form.update_field(Field::Company, " ".to_string());
        assert!(form.is_spam());
    }

    #[test]
    fn snapshot_is_independent_of_live_form() {
        let mut live = filled();
        let snapshot = live.take_snapshot();

        assert_eq!(live, ContactFormInput::default());
        live.update_field(Field::Name, "Bob".to_string());

        assert_eq!(snapshot, filled());
    }
}
