use std::fmt;

/// A named input slot of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in the order they appear on the form.
    pub const ALL: [Field; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Label shown on the input's border.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Example value rendered while the input is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("Edd"),
            Self::LastName => Some("Burke"),
            Self::Email => Some("bluebill1049@hotmail.com"),
            Self::Message => None,
        }
    }

    /// Stable identifier of the matching node in the submitted-values display.
    pub fn display_id(self) -> &'static str {
        match self {
            Self::FirstName => "firstnameDisplay",
            Self::LastName => "lastnameDisplay",
            Self::Email => "emailDisplay",
            Self::Message => "messageDisplay",
        }
    }

    /// Whether the field has a validation rule.
    pub fn required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Position of the field on the form.
    pub fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }

    /// Inverse of [`Field::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
