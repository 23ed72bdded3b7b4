//! Reflection of boolean attributes into markup.
//!
//! `true` gives an empty attribute, `false` removes it.

pub fn bool_to_attribute(value: bool) -> Option<String> {
    value.then(String::new)
}
