mod contact;
mod field;
mod validation;

pub use contact::Contact;
pub use field::Field;
pub use validation::{
    FIRST_NAME_MIN_LEN, ValidationError, validate_contact, validate_email, validate_field,
    validate_first_name, validate_last_name,
};
