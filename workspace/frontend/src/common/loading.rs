use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "loading-sm",
            SpinnerSize::Medium => "loading-md",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
}

/// Inline spinner sized for buttons and compact rows.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
    }
}
