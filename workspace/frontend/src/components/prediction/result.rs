use common::{PredictionResponse, Verdict};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub response: PredictionResponse,
}

/// Renders the potability verdict in its safe or unsafe styling.
#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let potable = props.response.verdict() == Verdict::Potable;

    let (panel, inset, headline, recommendation) = if potable {
        (
            "bg-green-100 text-green-800 border border-green-300",
            "bg-green-50",
            "✅ The water is safe for drinking.",
            "You can drink it!",
        )
    } else {
        (
            "bg-red-100 text-red-800 border border-red-300",
            "bg-red-50",
            "❌ The water is not safe for drinking.",
            "Avoid consumption.",
        )
    };

    html! {
        <div class={classes!("mt-6", "p-4", "rounded-lg", "shadow-md", panel)}>
            <h3 class="font-bold text-xl">{"Prediction Result"}</h3>
            <p class="mt-1 text-lg">{headline}</p>
            <div class={classes!("mt-2", "p-2", "rounded-md", inset)}>
                <strong>{"Summary:"}</strong>
                <ul class="list-disc pl-5 mt-1">
                    <li><strong>{"Recommendation: "}</strong>{recommendation}</li>
                </ul>
            </div>
        </div>
    }
}
