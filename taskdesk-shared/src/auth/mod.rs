/// Authentication primitives.
///
/// Only password hashing lives here; taskdesk's login returns the user's
/// identity directly and issues no tokens.

pub mod password;
