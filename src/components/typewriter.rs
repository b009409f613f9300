use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::config;
use crate::typewriter::{
    StepDelay, TypewriterState, ERASE_BASE_MS, ERASE_JITTER_MS, FULL_HOLD_MS, SENTENCE_HOLD_MS,
    START_DELAY_MS, TYPE_BASE_MS, TYPE_JITTER_MS,
};

fn jittered(base: u32, jitter: u32) -> u32 {
    base + (js_sys::Math::random() * f64::from(jitter)) as u32
}

/// Rotating tagline under the brand title. Every machine step schedules the
/// following one, with the gap picked by the delay class the step reported.
#[function_component(TypewriterText)]
pub fn typewriter_text() -> Html {
    let state = use_state(|| (TypewriterState::new(), None::<StepDelay>));

    {
        let snapshot = *state;
        let state = state.clone();
        use_effect_with_deps(
            move |&(machine, last)| {
                let delay = match last {
                    None => START_DELAY_MS,
                    Some(StepDelay::Type) => jittered(TYPE_BASE_MS, TYPE_JITTER_MS),
                    Some(StepDelay::Erase) => jittered(ERASE_BASE_MS, ERASE_JITTER_MS),
                    Some(StepDelay::FullHold) => FULL_HOLD_MS,
                    Some(StepDelay::SentenceHold) => SENTENCE_HOLD_MS,
                };
                let setter = state.setter();
                let timeout = Timeout::new(delay, move || {
                    let mut machine = machine;
                    let step = machine.step(config::TYPEWRITER_SENTENCES);
                    setter.set((machine, Some(step)));
                });
                move || drop(timeout)
            },
            snapshot,
        );
    }

    let visible = state.0.visible(config::TYPEWRITER_SENTENCES);

    html! {
        <p class="typewriter-line">
            <span class="typewriter-text">{ visible }</span>
            <span class="typewriter-caret"></span>
            <style>
                {r#"
                .typewriter-line {
                    min-height: 1.6em;
                    font-size: 1.1rem;
                    color: var(--text-secondary);
                }
                .typewriter-caret {
                    display: inline-block;
                    width: 2px;
                    height: 1.1em;
                    margin-left: 3px;
                    vertical-align: text-bottom;
                    background: var(--accent);
                    animation: caretBlink 1s step-end infinite;
                }
                @keyframes caretBlink {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </p>
    }
}
