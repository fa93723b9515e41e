use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// (field name, new value) as emitted by every form control
pub type FieldChange = Callback<(String, String)>;

#[derive(Properties, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    pub on_change: FieldChange,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let name = props.name.to_string();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name.clone(), input.value()));
        })
    };

    html! {
        <div class="form-field">
            <label>
                {format!("{}:", props.label)}
                <input
                    type={props.input_type.clone()}
                    name={props.name.clone()}
                    value={props.value.clone()}
                    required={props.required}
                    {oninput}
                />
            </label>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: Vec<&'static str>,
    pub on_change: FieldChange,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        let name = props.name.to_string();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((name.clone(), select.value()));
        })
    };

    html! {
        <div class="form-field">
            <label>{format!("{}:", props.label)}</label>
            <select name={props.name.clone()} required=true {onchange}>
                {for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                })}
            </select>
        </div>
    }
}
