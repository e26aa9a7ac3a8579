//! Contact form field identifiers

/// One of the four user-input slots of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in display and validation order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Machine name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project, ideas, or just say hello!",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in the form (0-3)
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_form_order() {
        for (idx, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
            assert_eq!(Field::from_index(idx), Some(*field));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Field::from_index(4), None);
    }

    #[test]
    fn test_keys_match_template_names() {
        let keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
        assert_eq!(keys, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(Field::Message.is_multiline());
        assert!(!Field::Name.is_multiline());
        assert!(!Field::Email.is_multiline());
        assert!(!Field::Subject.is_multiline());
    }
}
