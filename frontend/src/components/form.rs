use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Text | FieldKind::TextArea => "text",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldError {
    InvalidEmail,
    Required,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidEmail => f.write_str("Please enter a valid email address"),
            FieldError::Required => f.write_str("This field is required"),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Email fields are pattern-checked whether or not they are required.
pub fn validate(kind: FieldKind, required: bool, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Text | FieldKind::TextArea if required && value.is_empty() => {
            Err(FieldError::Required)
        }
        _ => Ok(()),
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldState {
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<FieldError>,
}

pub enum FieldAction {
    Blur,
    Input(String),
}

impl FieldState {
    pub fn new(kind: FieldKind, required: bool) -> Self {
        FieldState {
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }
}

impl Reducible for FieldState {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FieldAction::Blur => next.error = validate(next.kind, next.required, &next.value).err(),
            // Any keystroke clears the error; it is only re-checked on the next blur.
            FieldAction::Input(value) => {
                next.value = value;
                next.error = None;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ValidatedFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub kind: FieldKind,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(ValidatedField)]
pub fn validated_field(props: &ValidatedFieldProps) -> Html {
    let field = {
        let (kind, required) = (props.kind, props.required);
        use_reducer(move || FieldState::new(kind, required))
    };

    let on_blur = {
        let field = field.clone();
        Callback::from(move |_: FocusEvent| field.dispatch(FieldAction::Blur))
    };

    let on_input = {
        let field = field.clone();
        let kind = props.kind;
        Callback::from(move |e: InputEvent| {
            let current = match kind {
                FieldKind::TextArea => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            field.dispatch(FieldAction::Input(current));
        })
    };

    let invalid = field.error.is_some().then(|| "invalid");
    let id = props.name.clone();

    html! {
        <div class="form-group">
            <label for={id.clone()}>{&props.label}</label>
            if props.kind == FieldKind::TextArea {
                <textarea
                    id={id.clone()}
                    name={props.name.clone()}
                    rows="5"
                    class={classes!(invalid)}
                    placeholder={props.placeholder.clone()}
                    required={props.required}
                    value={field.value.clone()}
                    onblur={on_blur}
                    oninput={on_input}
                />
            } else {
                <input
                    id={id}
                    type={props.kind.input_type()}
                    name={props.name.clone()}
                    class={classes!(invalid)}
                    placeholder={props.placeholder.clone()}
                    required={props.required}
                    value={field.value.clone()}
                    onblur={on_blur}
                    oninput={on_input}
                />
            }
            if let Some(err) = field.error {
                <div class="field-error">{err.to_string()}</div>
            }
        </div>
    }
}
