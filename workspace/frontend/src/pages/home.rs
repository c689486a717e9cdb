use stylist::yew::use_style;
use yew::prelude::*;

use crate::components::prediction::PredictionForm;

/// Landing page: Purametrics header, tagline and the prediction form over
/// the animated aurora backdrop. Presentation only; the keyframes live in
/// the global stylesheet.
#[function_component(Home)]
pub fn home() -> Html {
    let aurora = use_style!(
        r#"
        position: absolute;
        inset: 0;
        overflow: hidden;

        &::before {
            content: "";
            position: absolute;
            top: -50%;
            left: -50%;
            width: 200%;
            height: 200%;
            background: linear-gradient(
                0deg,
                rgba(0, 105, 148, 0.3) 0%,
                rgba(64, 164, 180, 0.3) 25%,
                rgba(255, 255, 255, 0.2) 50%,
                rgba(0, 169, 204, 0.3) 75%,
                rgba(0, 105, 148, 0.3) 100%
            );
            background-size: 100% 100%;
            animation: aurora-movement 15s ease infinite;
            filter: blur(100px);
            opacity: 0.7;
        }
        "#
    );

    html! {
        <main class="min-h-screen flex items-center justify-center py-8 px-6 relative overflow-hidden">
            <div class={aurora}></div>
            <div class="w-full max-w-2xl relative z-10">
                <h1 class="text-3xl font-bold text-center text-blue-600 mb-2">
                    {"Welcome to Purametrics 💧"}
                </h1>
                <p class="font-bold text-center mb-6">
                    {"✨ Your Gateway to Clean Water Confidence ✨"}
                </p>
                <PredictionForm />
            </div>
        </main>
    }
}
