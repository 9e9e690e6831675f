/// What the validator checks a value against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// How the field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Input(&'static str),
    Select(&'static [(&'static str, &'static str)]),
    TextArea,
}

impl FieldControl {
    /// Mirrors `field.type` in the DOM, used for analytics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldControl::Input(kind) => kind,
            FieldControl::Select(_) => "select-one",
            FieldControl::TextArea => "textarea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub control: FieldControl,
}

pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("", "Select one"),
    ("ready", "Ready to enroll"),
    ("exploring", "Exploring options"),
    ("questions", "I have questions"),
];

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const INTEREST: &str = "interest";
pub const MESSAGE: &str = "message";

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: NAME,
        label: "Full name",
        placeholder: "Ada Lovelace",
        kind: FieldKind::Text,
        required: true,
        control: FieldControl::Input("text"),
    },
    FieldSpec {
        name: EMAIL,
        label: "Email",
        placeholder: "you@example.com",
        kind: FieldKind::Email,
        required: true,
        control: FieldControl::Input("email"),
    },
    FieldSpec {
        name: PHONE,
        label: "Phone (optional)",
        placeholder: "+1 555 0100",
        kind: FieldKind::Text,
        required: false,
        control: FieldControl::Input("tel"),
    },
    FieldSpec {
        name: INTEREST,
        label: "How ready are you?",
        placeholder: "",
        kind: FieldKind::Text,
        required: true,
        control: FieldControl::Select(INTEREST_OPTIONS),
    },
    FieldSpec {
        name: MESSAGE,
        label: "Message",
        placeholder: "Tell us what you want to build",
        kind: FieldKind::Text,
        required: false,
        control: FieldControl::TextArea,
    },
];
