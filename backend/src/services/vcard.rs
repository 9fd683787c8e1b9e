//! vCard 3.0 rendering of a stored profile.

use adapters::Profile;

pub const PHONE_FIELD: &str = "phone";
pub const EMAIL_FIELD: &str = "email";
pub const WEBSITE_FIELD: &str = "website";

/// A rendered card together with the attachment filename offered to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    pub filename: String,
    pub body: String,
}

pub fn render(profile: &Profile) -> VCard {
    let (family, given) = split_name(&profile.name);

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{family};{given}"),
        format!("FN:{}", profile.name),
    ];

    if let Some(phone) = contact_value(profile, PHONE_FIELD) {
        lines.push(format!("TEL;TYPE=CELL:{phone}"));
    }
    if let Some(email) = contact_value(profile, EMAIL_FIELD) {
        lines.push(format!("EMAIL:{email}"));
    }
    if let Some(website) = contact_value(profile, WEBSITE_FIELD) {
        lines.push(format!("URL;TYPE=Website:{website}"));
    }

    lines.push("END:VCARD".to_string());

    VCard {
        filename: format!("{}.vcf", profile.name),
        body: lines.join("\n"),
    }
}

/// First value of the given type. An empty first match counts as absent.
fn contact_value<'a>(profile: &'a Profile, kind: &str) -> Option<&'a str> {
    profile.first_value(kind).filter(|value| !value.is_empty())
}

/// Returns `(family, given)`.
///
/// Family is everything after the last space and given everything before the
/// first one, so middle parts of longer names are dropped: "Anna Maria Lopez"
/// gives ("Lopez", "Anna"). Existing cards depend on this output.
fn split_name(name: &str) -> (&str, &str) {
    match (name.find(' '), name.rfind(' ')) {
        (Some(first), Some(last)) => (&name[last + 1..], &name[..first]),
        _ => (name, ""),
    }
}
