//! User form bindings
//!
//! The form is controlled: it never owns a draft. Each input event is turned
//! into a fresh draft by [`apply`], and the caller decides where it lives.

use crate::models::{Gender, UserDraft};

/// Form inputs, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Surname,
    AvatarUrl,
    Age,
    Gender,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Surname,
        FormField::AvatarUrl,
        FormField::Age,
        FormField::Gender,
    ];

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Surname,
            FormField::Surname => FormField::AvatarUrl,
            FormField::AvatarUrl => FormField::Age,
            FormField::Age => FormField::Gender,
            FormField::Gender => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Gender,
            FormField::Surname => FormField::Name,
            FormField::AvatarUrl => FormField::Surname,
            FormField::Age => FormField::AvatarUrl,
            FormField::Gender => FormField::Age,
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Surname => "Surname",
            FormField::AvatarUrl => "Avatar URL",
            FormField::Age => "Age",
            FormField::Gender => "Select Gender",
        }
    }

    /// Current value of this field in `draft`, as displayed
    pub fn value<'a>(&self, draft: &'a UserDraft) -> &'a str {
        match self {
            FormField::Name => &draft.name,
            FormField::Surname => &draft.surname,
            FormField::AvatarUrl => &draft.avatar_url,
            FormField::Age => &draft.age,
            FormField::Gender => draft.gender.map(|g| g.as_str()).unwrap_or(""),
        }
    }
}

/// A single edit to the focused field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    PrevOption,
    NextOption,
}

/// Gender options in select order; `None` is the unset choice
const GENDER_OPTIONS: [Option<Gender>; 3] = [None, Some(Gender::Male), Some(Gender::Female)];

fn cycle_gender(current: Option<Gender>, forward: bool) -> Option<Gender> {
    let len = GENDER_OPTIONS.len();
    let pos = GENDER_OPTIONS
        .iter()
        .position(|g| *g == current)
        .unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    GENDER_OPTIONS[next]
}

fn edit_text(value: &str, input: FormInput, accept: impl Fn(char) -> bool) -> String {
    let mut value = value.to_string();
    match input {
        FormInput::Char(c) if accept(c) => value.push(c),
        FormInput::Backspace => {
            value.pop();
        }
        _ => {}
    }
    value
}

/// Produce the draft that results from applying `input` to `field`.
///
/// The returned draft is a copy of `draft` with at most that one field changed.
pub fn apply(draft: &UserDraft, field: FormField, input: FormInput) -> UserDraft {
    let mut next = draft.clone();
    match field {
        FormField::Name => next.name = edit_text(&draft.name, input, |c| !c.is_control()),
        FormField::Surname => next.surname = edit_text(&draft.surname, input, |c| !c.is_control()),
        FormField::AvatarUrl => {
            next.avatar_url = edit_text(&draft.avatar_url, input, |c| !c.is_control())
        }
        // Numeric input: digits only
        FormField::Age => next.age = edit_text(&draft.age, input, |c| c.is_ascii_digit()),
        FormField::Gender => {
            next.gender = match input {
                FormInput::PrevOption => cycle_gender(draft.gender, false),
                FormInput::NextOption | FormInput::Char(' ') => cycle_gender(draft.gender, true),
                FormInput::Backspace => None,
                FormInput::Char(_) => draft.gender,
            }
        }
    }
    next
}
